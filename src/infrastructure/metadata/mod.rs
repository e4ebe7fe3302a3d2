//! Patient metadata readers

mod input_data_xml;

pub use input_data_xml::InputDataXmlReader;
