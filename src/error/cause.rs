use crate::error::error::TexError;
use std::error::Error;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub enum Cause {
    Tex(TexError),
    Std(Arc<dyn Error + Send + Sync>),
}
