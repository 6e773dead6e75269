mod decoded;

pub use decoded::DecodedImageReader;
