pub mod customers;

pub use self::customers::*;
