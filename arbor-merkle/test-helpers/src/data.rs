pub mod binary;

mod encoded_value;
mod test_error;

pub use encoded_value::{
    EncodedValue,
    Encoding,
};
pub use test_error::TestError;
