//! Catalog of the data words whose meaning is known
//!
//! Only these fields are exported. The declaration order of
//! [`KnownField::ALL`] is the CSV column order.

use crate::types::record::Record;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum KnownField {
    Reslex,
    Ipap,
    Epap,
    TidalVolume,
    RepRate,
}

impl KnownField {
    pub const ALL: [KnownField; 5] = [
        KnownField::Reslex,
        KnownField::Ipap,
        KnownField::Epap,
        KnownField::TidalVolume,
        KnownField::RepRate,
    ];

    /// Position of the field among the packet's data words
    pub const fn index(self) -> usize {
        match self {
            KnownField::Reslex => 1,
            KnownField::Ipap => 2,
            KnownField::Epap => 3,
            KnownField::TidalVolume => 99,
            KnownField::RepRate => 104,
        }
    }

    /// Column label
    pub const fn name(self) -> &'static str {
        match self {
            KnownField::Reslex => "Reslex",
            KnownField::Ipap => "IPAP",
            KnownField::Epap => "EPAP",
            KnownField::TidalVolume => "tidal_vol",
            KnownField::RepRate => "rep_rate",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.name() == name)
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.index() == index)
    }
}

/// Known field labels in column order
pub fn header_row() -> Vec<&'static str> {
    KnownField::ALL.iter().map(|field| field.name()).collect()
}

/// Known field values of `record`, in the same order as [`header_row`]
pub fn values_row(record: &Record) -> Vec<u16> {
    KnownField::ALL
        .iter()
        .map(|field| record.value(*field))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::record::{Timestamp, FIELD_COUNT};

    #[test]
    fn test_header_row_order() {
        assert_eq!(
            header_row(),
            vec!["Reslex", "IPAP", "EPAP", "tidal_vol", "rep_rate"]
        );
    }

    #[test]
    fn test_values_row_follows_header() {
        let mut fields = vec![0u16; FIELD_COUNT];
        fields[1] = 11;
        fields[2] = 120;
        fields[3] = 80;
        fields[99] = 450;
        fields[104] = 14;
        let ts = Timestamp {
            year: 2021,
            month: 3,
            day: 15,
            hour: 10,
            minute: 30,
            second: 0,
            reserved: 0,
        };
        let record = Record::new(ts, fields).unwrap();

        assert_eq!(values_row(&record), vec![11, 120, 80, 450, 14]);
    }

    #[test]
    fn test_lookup_by_name_and_index() {
        assert_eq!(KnownField::from_name("EPAP"), Some(KnownField::Epap));
        assert_eq!(KnownField::from_name("epap"), None);
        assert_eq!(KnownField::from_index(99), Some(KnownField::TidalVolume));
        assert_eq!(KnownField::from_index(0), None);

        for field in KnownField::ALL {
            assert!(field.index() < FIELD_COUNT);
            assert_eq!(KnownField::from_index(field.index()), Some(field));
        }
    }
}
