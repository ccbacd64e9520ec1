pub use std::result::Result as StdResult;

pub use anyhow::{anyhow, Context};

pub use crate::error::Error;

pub type Result<T = (), E = anyhow::Error> = std::result::Result<T, E>;
