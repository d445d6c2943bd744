mod bedrock;

pub use bedrock::*;
