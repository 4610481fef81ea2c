use std::cell::Cell;
use std::fmt;

use crate::{
    BatchError,
    core::item::ItemWriter,
    item::fake::contact_reader::Contact,
};

/// Decorating writer that counts how many contacts carry each optional
/// field before handing the chunk to the delegate.
pub struct CoverageWriter<'a> {
    delegate: &'a dyn ItemWriter<Contact>,
    total: Cell<usize>,
    with_job_title: Cell<usize>,
    with_country_code: Cell<usize>,
    with_company_name: Cell<usize>,
}

impl<'a> CoverageWriter<'a> {
    pub fn new(delegate: &'a dyn ItemWriter<Contact>) -> CoverageWriter<'a> {
        CoverageWriter {
            delegate,
            total: Cell::new(0),
            with_job_title: Cell::new(0),
            with_country_code: Cell::new(0),
            with_company_name: Cell::new(0),
        }
    }

    pub fn report(&self) -> CoverageReport {
        CoverageReport {
            total: self.total.get(),
            with_job_title: self.with_job_title.get(),
            with_country_code: self.with_country_code.get(),
            with_company_name: self.with_company_name.get(),
        }
    }
}

impl ItemWriter<Contact> for CoverageWriter<'_> {
    fn write(&self, items: &[Contact]) -> Result<(), BatchError> {
        for contact in items {
            self.total.set(self.total.get() + 1);
            if !contact.job_title.is_empty() {
                self.with_job_title.set(self.with_job_title.get() + 1);
            }
            if !contact.country_code.is_empty() {
                self.with_country_code.set(self.with_country_code.get() + 1);
            }
            if !contact.company_name.is_empty() {
                self.with_company_name.set(self.with_company_name.get() + 1);
            }
        }
        self.delegate.write(items)
    }

    fn flush(&self) -> Result<(), BatchError> {
        self.delegate.flush()
    }

    fn open(&self) -> Result<(), BatchError> {
        self.delegate.open()
    }

    fn close(&self) -> Result<(), BatchError> {
        self.delegate.close()
    }
}

/// Snapshot of optional-field coverage over the written contacts.
#[derive(Debug, Clone, PartialEq)]
pub struct CoverageReport {
    pub total: usize,
    pub with_job_title: usize,
    pub with_country_code: usize,
    pub with_company_name: usize,
}

impl CoverageReport {
    fn percentage(&self, count: usize) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        count as f64 / self.total as f64 * 100.0
    }
}

impl fmt::Display for CoverageReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Stats:")?;
        writeln!(f, "  - Total contacts: {}", self.total)?;
        writeln!(
            f,
            "  - With job title: {} ({:.1}%)",
            self.with_job_title,
            self.percentage(self.with_job_title)
        )?;
        writeln!(
            f,
            "  - With country code: {} ({:.1}%)",
            self.with_country_code,
            self.percentage(self.with_country_code)
        )?;
        write!(
            f,
            "  - With company name: {} ({:.1}%)",
            self.with_company_name,
            self.percentage(self.with_company_name)
        )
    }
}
