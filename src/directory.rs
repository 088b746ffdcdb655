use std::error::Error as StdError;
use std::fmt;

use parking_lot::{Mutex, RwLock};
use rand::{rngs::StdRng, Rng, SeedableRng};
use serde::Serialize;
use time::OffsetDateTime;

/// Ids are drawn from `0..ID_SPACE`.
pub const ID_SPACE: u64 = 1_000_000;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Contact {
    pub id: u64,
    pub name: String,
    pub number: String,
}

impl Contact {
    fn new(id: u64, name: &str, number: &str) -> Self {
        Self {
            id,
            name: name.to_owned(),
            number: number.to_owned(),
        }
    }
}

/// The contacts every directory starts out with.
pub fn seed() -> Vec<Contact> {
    vec![
        Contact::new(1, "Arto Hellas", "040-123456"),
        Contact::new(2, "Ada Lovelace", "39-44-5323523"),
        Contact::new(3, "Dan Abramov", "12-43-234345"),
        Contact::new(4, "Mary Poppendieck", "39-23-6423122"),
    ]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    MissingField,
    DuplicateName,
    NotFound,
    IdSpaceExhausted,
}

impl Error {
    pub fn message(self) -> &'static str {
        match self {
            Self::MissingField => "name or number is missing",
            Self::DuplicateName => "name must be unique",
            Self::NotFound => "Person not found",
            Self::IdSpaceExhausted => "no free id left",
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        fmt.write_str(self.message())
    }
}

impl StdError for Error {}

/// Count and time of a [`Directory::summary`] call.
#[derive(Debug)]
pub struct Summary {
    pub count: usize,
    pub now: OffsetDateTime,
}

/// In-memory contact collection.
///
/// Readers share the lock while [`Directory::create`] and [`Directory::delete_by_id`] hold it exclusively for their whole check-and-modify step, so no partially applied mutation is ever visible.
pub struct Directory {
    contacts: RwLock<Vec<Contact>>,
    rng: Mutex<StdRng>,
}

impl Directory {
    pub fn seeded() -> Self {
        Self::new(seed(), StdRng::from_entropy())
    }

    pub fn new(contacts: Vec<Contact>, rng: StdRng) -> Self {
        Self {
            contacts: RwLock::new(contacts),
            rng: Mutex::new(rng),
        }
    }

    pub fn list(&self) -> Vec<Contact> {
        self.contacts.read().clone()
    }

    pub fn len(&self) -> usize {
        self.contacts.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn summary(&self) -> Summary {
        Summary {
            count: self.len(),
            now: OffsetDateTime::now_utc(),
        }
    }

    /// Unparsable ids never match any contact.
    pub fn get_by_id(&self, id: &str) -> Result<Contact, Error> {
        let id = parse_id(id).ok_or(Error::NotFound)?;

        self.contacts
            .read()
            .iter()
            .find(|contact| contact.id == id)
            .cloned()
            .ok_or(Error::NotFound)
    }

    /// Removing an id which is not present is not an error.
    pub fn delete_by_id(&self, id: &str) {
        let id = match parse_id(id) {
            Some(id) => id,
            None => return,
        };

        let mut contacts = self.contacts.write();

        let len = contacts.len();
        contacts.retain(|contact| contact.id != id);

        if contacts.len() != len {
            tracing::debug!("Deleted contact {}", id);
        }
    }

    pub fn create(&self, name: Option<&str>, number: Option<&str>) -> Result<Contact, Error> {
        let (name, number) = match (name, number) {
            (Some(name), Some(number)) if !name.is_empty() && !number.is_empty() => (name, number),
            _ => return Err(Error::MissingField),
        };

        let mut contacts = self.contacts.write();

        if contacts.iter().any(|contact| contact.name == name) {
            return Err(Error::DuplicateName);
        }

        if contacts.len() as u64 >= ID_SPACE {
            return Err(Error::IdSpaceExhausted);
        }

        let id = {
            let mut rng = self.rng.lock();

            loop {
                let id = rng.gen_range(0..ID_SPACE);

                if contacts.iter().all(|contact| contact.id != id) {
                    break id;
                }

                tracing::debug!("Random id {} is already taken", id);
            }
        };

        let contact = Contact::new(id, name, number);
        contacts.push(contact.clone());

        tracing::debug!("Created contact {}", id);

        Ok(contact)
    }
}

/// Resolves ids like a JavaScript `Number` coercion: surrounding whitespace is ignored, blank is zero, `0x`/`0o`/`0b` prefixes select the radix and decimal notation such as `3.0`, `1e0` or `-0` is accepted as long as it denotes a whole number within `0..ID_SPACE`.
fn parse_id(id: &str) -> Option<u64> {
    let id = id.trim();

    if id.is_empty() {
        return Some(0);
    }

    for (prefixes, radix) in [(["0x", "0X"], 16), (["0o", "0O"], 8), (["0b", "0B"], 2)] {
        if let Some(digits) = prefixes.iter().find_map(|prefix| id.strip_prefix(prefix)) {
            if digits.is_empty() || !digits.chars().all(|digit| digit.is_digit(radix)) {
                return None;
            }

            return u64::from_str_radix(digits, radix)
                .ok()
                .filter(|id| *id < ID_SPACE);
        }
    }

    let id = id.parse::<f64>().ok()?;

    if id.fract() == 0.0 && (0.0..ID_SPACE as f64).contains(&id) {
        Some(id as u64)
    } else {
        None
    }
}
