//! Built-in reference schemas: closed-form arithmetical calendars covering
//! the solar, 13-month solar and lunar profiles.

pub use coptic::Coptic13Schema;
pub use gregorian::GregorianSchema;
pub use islamic::TabularIslamicSchema;

pub(crate) mod coptic;
pub(crate) mod gregorian;
pub(crate) mod islamic;
