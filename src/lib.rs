//! Oracle Cloud Infrastructure Data Science SDK for Rust
//!
//! Typed models, a service client and "wait for state" composite
//! operations for the OCI Data Science REST API (projects, jobs, job runs,
//! models and work requests).
//!
//! # Authentication
//!
//! Requests are signed with an API key read from `~/.oci/config` through
//! [`ConfigFileAuth`]. Any other signer can be plugged in by implementing
//! [`AuthProvider`], and any other HTTP stack by implementing
//! [`transport::Transport`].
//!
//! # Example
//!
//! ```no_run
//! use oci_datascience::auth::ConfigFileAuth;
//! use oci_datascience::data_science::{
//!     CreateOptions, DataScienceClient, DataScienceCompositeOperations,
//! };
//! use oci_datascience::models::{CreateProjectDetails, ProjectLifecycleState};
//! use oci_datascience::ClientConfig;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let auth = Arc::new(ConfigFileAuth::from_file(None, None)?);
//!     let config = ClientConfig::from_auth(auth.as_ref()).await?;
//!     let client = DataScienceClient::new(auth, config)?;
//!
//!     let composite = DataScienceCompositeOperations::new(client);
//!     let details = CreateProjectDetails::new("ocid1.compartment.oc1..example")
//!         .display_name("experiments");
//!     let project = composite
//!         .create_project_and_wait_for_state(
//!             &details,
//!             &CreateOptions::default(),
//!             &[ProjectLifecycleState::Active],
//!             None,
//!         )
//!         .await?;
//!     println!("Project ready: {:?}", project.data.id);
//!
//!     Ok(())
//! }
//! ```

pub mod auth;
pub mod config;
pub mod data_science;
pub mod error;
pub mod models;
pub mod retry;
pub mod transport;
pub mod validate;
pub mod waiter;

// Re-export commonly used types
pub use auth::{AuthError, AuthProvider, ConfigFileAuth};
pub use config::ClientConfig;
pub use data_science::{DataScienceClient, DataScienceCompositeOperations};
pub use error::{Error, Result};
pub use retry::RetryConfig;
pub use transport::Response;
pub use waiter::{WaitOutcome, WaiterConfig};
