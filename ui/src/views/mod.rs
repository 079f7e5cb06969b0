mod records;
pub use records::Records;

mod record_page;
pub use record_page::RecordPage;
