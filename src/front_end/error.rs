use super::EdgeListRule;

pub type Result<T> = std::result::Result<T, pest::error::Error<EdgeListRule>>;
