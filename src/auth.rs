//! Request signing for the Data Science client
//!
//! Only API key authentication is provided: a private key referenced from
//! `~/.oci/config` signs every request with the OCI HTTP signature scheme
//! (`rsa-sha256` over `date`, `(request-target)`, `host` and, for requests
//! with a body, `content-length`, `content-type` and `x-content-sha256`).
//! Other principals plug in through the [`AuthProvider`] trait.

use async_trait::async_trait;
use aws_lc_rs::signature::{KeyPair, RsaKeyPair, RSA_PKCS1_SHA256};
use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use reqwest::header::HeaderMap;
use sha2::{Digest, Sha256};
use thiserror::Error;
use tracing::{debug, instrument};

/// Errors that can occur while loading credentials or signing a request
#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Failed to load private key: {0}")]
    KeyLoadError(String),
    #[error("Failed to sign request: {0}")]
    SigningError(String),
    #[error("Invalid key format: {0}")]
    InvalidKeyFormat(String),
    #[error("Configuration error: {0}")]
    ConfigError(String),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Trait for authentication providers
///
/// Implementors sign OCI API requests and expose the tenancy and region
/// the credentials belong to.
#[async_trait]
pub trait AuthProvider: Send + Sync {
    /// Sign a request by adding the `authorization` header
    async fn sign_request(
        &self,
        headers: &mut HeaderMap,
        method: &str,
        path: &str,
        host: &str,
    ) -> Result<(), AuthError>;

    /// Get the tenancy OCID
    async fn get_tenancy_id(&self) -> Result<String, AuthError>;

    /// Get the region identifier
    async fn get_region(&self) -> Result<String, AuthError>;
}

/// Compute SHA256 hash of body and return base64-encoded result
pub fn encode_body(body: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(body.as_bytes());
    BASE64.encode(hasher.finalize())
}

/// Strip scheme and path from an endpoint, keeping a non-default port.
fn host_of(endpoint: &str) -> String {
    if endpoint.starts_with("http://") || endpoint.starts_with("https://") {
        reqwest::Url::parse(endpoint)
            .ok()
            .and_then(|u| {
                u.host_str().map(|h| match u.port() {
                    Some(port) => format!("{}:{}", h, port),
                    None => h.to_string(),
                })
            })
            .unwrap_or_else(|| endpoint.to_string())
    } else {
        endpoint.to_string()
    }
}

fn header_str<'a>(headers: &'a HeaderMap, name: &str) -> Result<Option<&'a str>, AuthError> {
    headers
        .get(name)
        .map(|v| {
            v.to_str()
                .map_err(|e| AuthError::SigningError(format!("Invalid {} header: {}", name, e)))
        })
        .transpose()
}

/// Build the signing string for a request.
///
/// Returns the newline-joined string to sign and the space-separated list of
/// header names it covers, in the same order.
fn signing_string(
    headers: &HeaderMap,
    method: &str,
    path: &str,
    host: &str,
) -> Result<(String, String), AuthError> {
    let date = header_str(headers, "date")?
        .ok_or_else(|| AuthError::SigningError("Missing date header".to_string()))?;

    let mut data = format!(
        "date: {}\n(request-target): {} {}\nhost: {}",
        date,
        method.to_lowercase(),
        path,
        host_of(host)
    );
    let mut covered = String::from("date (request-target) host");

    for name in ["content-length", "content-type", "x-content-sha256"] {
        if let Some(value) = header_str(headers, name)? {
            data.push_str(&format!("\n{}: {}", name, value));
            covered.push(' ');
            covered.push_str(name);
        }
    }

    Ok((data, covered))
}

fn sign_request_with_key(
    key_pair: &RsaKeyPair,
    key_id: &str,
    headers: &HeaderMap,
    method: &str,
    path: &str,
    host: &str,
) -> Result<String, AuthError> {
    let (data, covered) = signing_string(headers, method, path, host)?;

    let rng = aws_lc_rs::rand::SystemRandom::new();
    let mut signature = vec![0u8; key_pair.public_modulus_len()];
    key_pair
        .sign(&RSA_PKCS1_SHA256, &rng, data.as_bytes(), &mut signature)
        .map_err(|e| AuthError::SigningError(format!("Signing failed: {:?}", e)))?;

    Ok(format!(
        "Signature algorithm=\"rsa-sha256\",headers=\"{}\",keyId=\"{}\",signature=\"{}\",version=\"1\"",
        covered,
        key_id,
        BASE64.encode(&signature)
    ))
}

/// Map short region codes to full region identifiers
pub fn normalize_region(region: &str) -> String {
    match region.to_lowercase().as_str() {
        "iad" => "us-ashburn-1",
        "phx" => "us-phoenix-1",
        "sjc" => "us-sanjose-1",
        "ord" => "us-chicago-1",
        "fra" => "eu-frankfurt-1",
        "lhr" => "uk-london-1",
        "ams" => "eu-amsterdam-1",
        "zrh" => "eu-zurich-1",
        "nrt" => "ap-tokyo-1",
        "kix" => "ap-osaka-1",
        "icn" => "ap-seoul-1",
        "syd" => "ap-sydney-1",
        "bom" => "ap-mumbai-1",
        "sin" => "ap-singapore-1",
        "gru" => "sa-saopaulo-1",
        "jed" => "me-jeddah-1",
        "dxb" => "me-dubai-1",
        other => return other.to_string(),
    }
    .to_string()
}

/// Resolve the config file path, defaulting to `~/.oci/config`.
pub(crate) fn config_file_path(file_path: Option<String>) -> Result<String, AuthError> {
    match file_path {
        Some(path) => Ok(path),
        None => {
            let home_dir = home::home_dir().ok_or_else(|| {
                AuthError::ConfigError("Cannot determine home directory".to_string())
            })?;
            Ok(format!("{}/.oci/config", home_dir.to_string_lossy()))
        }
    }
}

/// Read one profile of an OCI config file.
pub(crate) fn load_profile(
    file_path: Option<String>,
    profile_name: Option<String>,
) -> Result<(configparser::ini::Ini, String), AuthError> {
    use configparser::ini::Ini;

    let fp = config_file_path(file_path)?;
    let pn = profile_name.unwrap_or_else(|| "DEFAULT".to_string());

    let content = std::fs::read_to_string(&fp)
        .map_err(|e| AuthError::ConfigError(format!("Config file '{}' not found: {}", fp, e)))?;

    let mut config = Ini::new();
    config
        .read(content)
        .map_err(|e| AuthError::ConfigError(format!("Invalid config file: {}", e)))?;

    Ok((config, pn))
}

fn required_key(
    config: &configparser::ini::Ini,
    profile: &str,
    key: &str,
) -> Result<String, AuthError> {
    config
        .get(profile, key)
        .ok_or_else(|| AuthError::ConfigError(format!("Missing '{}' in profile {}", key, profile)))
}

/// Authentication using an API key from the OCI config file
pub struct ConfigFileAuth {
    pub user: String,
    pub fingerprint: String,
    pub tenancy: String,
    pub region: String,
    key_pair: RsaKeyPair,
}

impl std::fmt::Debug for ConfigFileAuth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConfigFileAuth")
            .field("user", &self.user)
            .field("fingerprint", &self.fingerprint)
            .field("tenancy", &self.tenancy)
            .field("region", &self.region)
            .field("private_key", &"[REDACTED]")
            .finish()
    }
}

impl ConfigFileAuth {
    /// Create a new ConfigFileAuth with explicit parameters
    pub fn new(
        user: String,
        key_file: String,
        fingerprint: String,
        tenancy: String,
        region: String,
        passphrase: Option<String>,
    ) -> Result<Self, AuthError> {
        let key_content = std::fs::read_to_string(&key_file)
            .map_err(|e| AuthError::KeyLoadError(format!("Failed to read key file: {}", e)))?;

        let key_pair = Self::load_private_key(&key_content, passphrase.as_deref())?;

        Ok(Self::with_key_pair(user, fingerprint, tenancy, region, key_pair))
    }

    /// Create a ConfigFileAuth around an already loaded key pair
    pub fn with_key_pair(
        user: String,
        fingerprint: String,
        tenancy: String,
        region: String,
        key_pair: RsaKeyPair,
    ) -> Self {
        Self {
            user,
            fingerprint,
            tenancy,
            region: normalize_region(&region),
            key_pair,
        }
    }

    /// Load authentication from OCI config file
    ///
    /// # Arguments
    /// * `file_path` - Path to config file (defaults to ~/.oci/config)
    /// * `profile_name` - Profile name (defaults to "DEFAULT")
    pub fn from_file(
        file_path: Option<String>,
        profile_name: Option<String>,
    ) -> Result<Self, AuthError> {
        let (config, pn) = load_profile(file_path, profile_name)?;

        let user = required_key(&config, &pn, "user")?;
        let key_file = required_key(&config, &pn, "key_file")?;
        let fingerprint = required_key(&config, &pn, "fingerprint")?;
        let tenancy = required_key(&config, &pn, "tenancy")?;
        let region = required_key(&config, &pn, "region")?;
        let passphrase = config.get(&pn, "pass_phrase");

        Self::new(user, key_file, fingerprint, tenancy, region, passphrase)
    }

    fn load_private_key(
        pem_content: &str,
        passphrase: Option<&str>,
    ) -> Result<RsaKeyPair, AuthError> {
        if passphrase.is_some_and(|p| !p.is_empty()) {
            return Err(AuthError::KeyLoadError(
                "Encrypted keys are not supported; use an unencrypted key".to_string(),
            ));
        }

        let pem = ::pem::parse(pem_content)
            .map_err(|e| AuthError::InvalidKeyFormat(format!("PEM parse error: {}", e)))?;

        // PKCS8 first, then PKCS1
        RsaKeyPair::from_pkcs8(pem.contents())
            .or_else(|_| RsaKeyPair::from_der(pem.contents()))
            .map_err(|e| AuthError::InvalidKeyFormat(format!("Key parse error: {:?}", e)))
    }

    fn key_id(&self) -> String {
        format!("{}/{}/{}", self.tenancy, self.user, self.fingerprint)
    }
}

#[async_trait]
impl AuthProvider for ConfigFileAuth {
    #[instrument(skip(self, headers), fields(method = %method, path = %path))]
    async fn sign_request(
        &self,
        headers: &mut HeaderMap,
        method: &str,
        path: &str,
        host: &str,
    ) -> Result<(), AuthError> {
        let authorization =
            sign_request_with_key(&self.key_pair, &self.key_id(), headers, method, path, host)?;
        headers.insert(
            "authorization",
            authorization.parse().map_err(|e| {
                AuthError::SigningError(format!("Invalid authorization header: {}", e))
            })?,
        );
        debug!("Request signed");
        Ok(())
    }

    async fn get_tenancy_id(&self) -> Result<String, AuthError> {
        Ok(self.tenancy.clone())
    }

    async fn get_region(&self) -> Result<String, AuthError> {
        Ok(self.region.clone())
    }
}
