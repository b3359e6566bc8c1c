//! CLI command implementations.
//!
//! Each submodule owns one or more related `Commands` variants:
//!
//! | Module      | Commands handled                  |
//! |-------------|-----------------------------------|
//! | `dashboard` | `Dashboard` (the default)         |
//! | `session`   | `Login`, `Logout`, `Status`       |
//! | `jobs`      | `List`, `Create`, `Edit`, `Delete`|
//! | `config`    | `Config`                          |

pub mod config;
pub mod dashboard;
pub mod jobs;
pub mod session;

pub use config::cmd_config;
pub use dashboard::cmd_dashboard;
pub use jobs::{cmd_create, cmd_delete, cmd_edit, cmd_list};
pub use session::{cmd_login, cmd_logout, cmd_status};
