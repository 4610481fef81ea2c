pub mod contact_reader;
