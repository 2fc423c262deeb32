pub mod input_field;

pub use input_field::{InputField, InputFieldWidget};
