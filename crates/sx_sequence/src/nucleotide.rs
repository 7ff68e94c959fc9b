//! Nucleotide and NucleotideVec definitions.
//!
//! A `Nucleotide` is one of the four DNA bases. A `NucleotideVec` is the
//! sequence type used throughout insilex; it parses from and displays as
//! a plain string (e.g. "GGTTGG"), which is also its serde representation.
//!

use std::fmt;
use std::ops::Deref;
use std::ops::DerefMut;
use std::str::FromStr;

use rand::Rng;
use rand::distr::Distribution;
use rand::distr::StandardUniform;
use serde::Serialize;
use serde::Serializer;
use serde::Deserialize;
use serde::Deserializer;

use crate::SequenceError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Nucleotide {
    A,
    C,
    G,
    T,
}

/// The DNA alphabet, in drawing order.
pub const ALPHABET: [Nucleotide; 4] = [Nucleotide::A, Nucleotide::T, Nucleotide::G, Nucleotide::C];

impl Nucleotide {
    /// Watson-Crick complement: A<->T, G<->C.
    pub fn complement(self) -> Self {
        match self {
            Nucleotide::A => Nucleotide::T,
            Nucleotide::T => Nucleotide::A,
            Nucleotide::G => Nucleotide::C,
            Nucleotide::C => Nucleotide::G,
        }
    }

    pub fn is_gc(self) -> bool {
        matches!(self, Nucleotide::G | Nucleotide::C)
    }

    /// Returns true if `other` is the Watson-Crick partner of `self`.
    pub fn pairs_with(self, other: Nucleotide) -> bool {
        self.complement() == other
    }
}

impl TryFrom<char> for Nucleotide {
    type Error = SequenceError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            'A' => Ok(Nucleotide::A),
            'C' => Ok(Nucleotide::C),
            'G' => Ok(Nucleotide::G),
            'T' => Ok(Nucleotide::T),
            _ => Err(SequenceError::InvalidNucleotide(c)),
        }
    }
}

impl From<Nucleotide> for char {
    fn from(n: Nucleotide) -> Self {
        match n {
            Nucleotide::A => 'A',
            Nucleotide::C => 'C',
            Nucleotide::G => 'G',
            Nucleotide::T => 'T',
        }
    }
}

impl fmt::Display for Nucleotide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", char::from(*self))
    }
}

/// Uniform draw over the four bases.
impl Distribution<Nucleotide> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Nucleotide {
        ALPHABET[rng.random_range(0..ALPHABET.len())]
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NucleotideVec(pub Vec<Nucleotide>);

impl NucleotideVec {
    /// Draw a uniform-random sequence of the given length.
    pub fn random<R: Rng + ?Sized>(length: usize, rng: &mut R) -> Self {
        NucleotideVec((0..length).map(|_| rng.random::<Nucleotide>()).collect())
    }

    /// Number of G and C bases.
    pub fn gc_count(&self) -> usize {
        self.0.iter().filter(|n| n.is_gc()).count()
    }
}

impl Deref for NucleotideVec {
    type Target = Vec<Nucleotide>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for NucleotideVec {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl From<Vec<Nucleotide>> for NucleotideVec {
    fn from(v: Vec<Nucleotide>) -> Self {
        NucleotideVec(v)
    }
}

impl TryFrom<&str> for NucleotideVec {
    type Error = SequenceError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.chars()
            .map(Nucleotide::try_from)
            .collect::<Result<Vec<_>, _>>()
            .map(NucleotideVec)
    }
}

impl FromStr for NucleotideVec {
    type Err = SequenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NucleotideVec::try_from(s)
    }
}

impl fmt::Display for NucleotideVec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &n in &self.0 {
            write!(f, "{}", char::from(n))?;
        }
        Ok(())
    }
}

impl Serialize for NucleotideVec {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for NucleotideVec {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        NucleotideVec::try_from(s.as_str()).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_parse_and_display() {
        let seq = NucleotideVec::try_from("GGTTGG").unwrap();
        assert_eq!(seq.len(), 6);
        assert_eq!(seq[2], Nucleotide::T);
        assert_eq!(format!("{}", seq), "GGTTGG");
        assert_eq!("ACGT".parse::<NucleotideVec>().unwrap().to_string(), "ACGT");
    }

    #[test]
    fn test_parse_rejects_foreign_symbols() {
        assert_eq!(
            NucleotideVec::try_from("ACGU"),
            Err(SequenceError::InvalidNucleotide('U'))
        );
        assert!(NucleotideVec::try_from("acgt").is_err());
    }

    #[test]
    fn test_complement() {
        for n in ALPHABET {
            assert_eq!(n.complement().complement(), n);
            assert!(n.pairs_with(n.complement()));
            assert!(!n.pairs_with(n));
        }
        assert_eq!(Nucleotide::G.complement(), Nucleotide::C);
        assert_eq!(Nucleotide::A.complement(), Nucleotide::T);
    }

    #[test]
    fn test_gc_count() {
        let seq = NucleotideVec::try_from("ATGCATGCGG").unwrap();
        assert_eq!(seq.gc_count(), 6);
        assert_eq!(NucleotideVec::default().gc_count(), 0);
    }

    #[test]
    fn test_random_sequence_is_seeded() {
        let mut r1 = StdRng::seed_from_u64(7);
        let mut r2 = StdRng::seed_from_u64(7);
        let a = NucleotideVec::random(40, &mut r1);
        let b = NucleotideVec::random(40, &mut r2);
        assert_eq!(a.len(), 40);
        assert_eq!(a, b);
    }

    #[test]
    fn test_serde_as_string() {
        let seq = NucleotideVec::try_from("GATTACA").unwrap();
        let json = serde_json::to_string(&seq).unwrap();
        assert_eq!(json, "\"GATTACA\"");
        let back: NucleotideVec = serde_json::from_str(&json).unwrap();
        assert_eq!(back, seq);
        assert!(serde_json::from_str::<NucleotideVec>("\"GAXT\"").is_err());
    }
}
