use std::cell::{Cell, RefCell};
use std::fmt;

use ::serde::{Deserialize, Serialize};
use fake::faker::company::raw::CompanyName;
use fake::faker::internet::raw::{DomainSuffix, FreeEmailProvider};
use fake::faker::lorem::raw::Word;
use fake::locales::EN;
use fake::{Fake, faker::name::raw::*};
use log::debug;
use rand::rngs::ThreadRng;
use rand::{Rng, RngExt};

use crate::{core::item::ItemReader, error::BatchError};

/// Pool of job titles a contact may carry.
pub const JOB_TITLES: [&str; 20] = [
    "Software Engineer",
    "Product Manager",
    "Data Scientist",
    "DevOps Engineer",
    "UX Designer",
    "Marketing Manager",
    "Sales Director",
    "CTO",
    "CEO",
    "VP of Engineering",
    "Business Analyst",
    "Project Manager",
    "QA Engineer",
    "Customer Success Manager",
    "Account Executive",
    "HR Manager",
    "CFO",
    "Operations Manager",
    "Content Writer",
    "Social Media Manager",
];

/// Pool of two-letter country codes a contact may carry.
pub const COUNTRY_CODES: [&str; 10] = [
    "US", "UK", "CA", "AU", "DE", "FR", "ES", "IT", "NL", "SE",
];

/// Probability that any single optional field is left empty.
const OMIT_PROBABILITY: f64 = 0.2;

/// One synthesized contact row. Optional fields hold an empty string when
/// omitted, so every row serializes to exactly six CSV columns.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub job_title: String,
    pub country_code: String,
    pub company_name: String,
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "first_name:{}, last_name:{}, email:{}",
            self.first_name, self.last_name, self.email
        )
    }
}

/// Generates contacts on demand from an injected random source.
///
/// Yields exactly the configured number of items, then `None`.
pub struct ContactReader<R: Rng> {
    count: Cell<usize>,
    rng: RefCell<R>,
}

impl<R: Rng> ItemReader<Contact> for ContactReader<R> {
    fn read(&self) -> Option<Result<Contact, BatchError>> {
        if self.count.get() == 0 {
            return None;
        }

        self.count.set(self.count.get() - 1);

        let mut rng = self.rng.borrow_mut();
        let contact = fake_contact(&mut *rng);
        debug!("Contact: {}", contact);
        Some(Ok(contact))
    }
}

fn fake_contact<R: Rng>(rng: &mut R) -> Contact {
    let first_name: String = FirstName(EN).fake_with_rng(rng);
    let last_name: String = LastName(EN).fake_with_rng(rng);
    let email = fake_email(rng, &first_name, &last_name);

    let job_title = if is_filled(rng) {
        JOB_TITLES[rng.random_range(0..JOB_TITLES.len())].to_string()
    } else {
        String::new()
    };

    let country_code = if is_filled(rng) {
        COUNTRY_CODES[rng.random_range(0..COUNTRY_CODES.len())].to_string()
    } else {
        String::new()
    };

    let company_name = if is_filled(rng) {
        CompanyName(EN).fake_with_rng(rng)
    } else {
        String::new()
    };

    Contact {
        first_name,
        last_name,
        email,
        job_title,
        country_code,
        company_name,
    }
}

fn is_filled<R: Rng>(rng: &mut R) -> bool {
    rng.random::<f64>() >= OMIT_PROBABILITY
}

/// Derives an email address from the name parts, choosing uniformly among
/// three local-part templates. Name parts are lowercased first.
fn fake_email<R: Rng>(rng: &mut R, first_name: &str, last_name: &str) -> String {
    let first = first_name.to_lowercase();
    let last = last_name.to_lowercase();

    match rng.random_range(0..3) {
        0 => format!("{}.{}@{}", first, last, fake_domain(rng)),
        1 => {
            let provider: String = FreeEmailProvider(EN).fake_with_rng(rng);
            format!("{}{}@{}", first, rng.random_range(1..100), provider)
        }
        _ => {
            let initial = first.chars().next().unwrap_or_default();
            format!("{}{}@{}", last, initial, fake_domain(rng))
        }
    }
}

fn fake_domain<R: Rng>(rng: &mut R) -> String {
    let name: String = Word(EN).fake_with_rng(rng);
    let suffix: String = DomainSuffix(EN).fake_with_rng(rng);
    format!("{}.{}", name.to_lowercase(), suffix)
}

pub struct ContactReaderBuilder<R: Rng> {
    number_of_items: usize,
    rng: R,
}

impl Default for ContactReaderBuilder<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl ContactReaderBuilder<ThreadRng> {
    pub fn new() -> ContactReaderBuilder<ThreadRng> {
        ContactReaderBuilder {
            number_of_items: 0,
            rng: rand::rng(),
        }
    }
}

impl<R: Rng> ContactReaderBuilder<R> {
    pub fn number_of_items(mut self, number_of_items: usize) -> ContactReaderBuilder<R> {
        self.number_of_items = number_of_items;
        self
    }

    /// Replaces the random source. Tests pass a seeded rng here to make
    /// generation reproducible.
    pub fn rng<S: Rng>(self, rng: S) -> ContactReaderBuilder<S> {
        ContactReaderBuilder {
            number_of_items: self.number_of_items,
            rng,
        }
    }

    pub fn build(self) -> ContactReader<R> {
        ContactReader {
            count: Cell::new(self.number_of_items),
            rng: RefCell::new(self.rng),
        }
    }
}
