use std::fmt;
use std::ops::AddAssign;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The three constitutional categories, declared in tie-break priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dosha {
    Vata,
    Pitta,
    Kapha,
}

impl Dosha {
    pub const ALL: [Dosha; 3] = [Dosha::Vata, Dosha::Pitta, Dosha::Kapha];

    pub fn key(&self) -> &'static str {
        match self {
            Dosha::Vata => "vata",
            Dosha::Pitta => "pitta",
            Dosha::Kapha => "kapha",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Dosha::Vata => "Vata",
            Dosha::Pitta => "Pitta",
            Dosha::Kapha => "Kapha",
        }
    }
}

impl fmt::Display for Dosha {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("dosha must be vata, pitta, or kapha (got '{0}')")]
pub struct DoshaParseError(pub String);

impl FromStr for Dosha {
    type Err = DoshaParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "vata" => Ok(Dosha::Vata),
            "pitta" => Ok(Dosha::Pitta),
            "kapha" => Ok(Dosha::Kapha),
            _ => Err(DoshaParseError(value.to_string())),
        }
    }
}

/// Raw accumulator buckets for the three doshas.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DoshaScores {
    pub vata: u32,
    pub pitta: u32,
    pub kapha: u32,
}

impl DoshaScores {
    pub const fn new(vata: u32, pitta: u32, kapha: u32) -> Self {
        Self { vata, pitta, kapha }
    }

    /// A weight vector that only feeds one bucket.
    pub fn single(dosha: Dosha, weight: u32) -> Self {
        let mut scores = Self::default();
        *scores.get_mut(dosha) = weight;
        scores
    }

    pub fn get(&self, dosha: Dosha) -> u32 {
        match dosha {
            Dosha::Vata => self.vata,
            Dosha::Pitta => self.pitta,
            Dosha::Kapha => self.kapha,
        }
    }

    pub fn get_mut(&mut self, dosha: Dosha) -> &mut u32 {
        match dosha {
            Dosha::Vata => &mut self.vata,
            Dosha::Pitta => &mut self.pitta,
            Dosha::Kapha => &mut self.kapha,
        }
    }

    pub fn total(&self) -> u32 {
        self.vata + self.pitta + self.kapha
    }

    /// Doshas ordered by descending score; equal scores keep the Vata, Pitta, Kapha order.
    pub fn ranked(&self) -> [(Dosha, u32); 3] {
        let mut ranked = Dosha::ALL.map(|dosha| (dosha, self.get(dosha)));
        ranked.sort_by(|(_, a), (_, b)| b.cmp(a));
        ranked
    }

    pub fn primary(&self) -> Dosha {
        self.ranked()[0].0
    }

    pub fn secondary(&self) -> Dosha {
        self.ranked()[1].0
    }

    /// Share of the total per bucket, or `None` when nothing scored.
    pub fn percentages(&self) -> Option<DoshaPercentages> {
        let total = self.total();
        if total == 0 {
            return None;
        }

        let share = |value: u32| ((value as f64 / total as f64) * 100.0).round() as u8;
        Some(DoshaPercentages {
            vata: share(self.vata),
            pitta: share(self.pitta),
            kapha: share(self.kapha),
        })
    }
}

impl AddAssign for DoshaScores {
    fn add_assign(&mut self, rhs: Self) {
        self.vata += rhs.vata;
        self.pitta += rhs.pitta;
        self.kapha += rhs.kapha;
    }
}

/// Independently rounded percentages; their sum may drift from 100 by a point or two.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DoshaPercentages {
    pub vata: u8,
    pub pitta: u8,
    pub kapha: u8,
}

impl DoshaPercentages {
    pub fn sum(&self) -> u16 {
        self.vata as u16 + self.pitta as u16 + self.kapha as u16
    }
}

/// `"Primary-Secondary"` label, e.g. `Vata-Pitta`.
pub fn constitution_label(primary: Dosha, secondary: Dosha) -> String {
    format!("{}-{}", primary.label(), secondary.label())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ties_resolve_by_fixed_priority() {
        let scores = DoshaScores::new(6, 6, 6);
        assert_eq!(scores.primary(), Dosha::Vata);
        assert_eq!(scores.secondary(), Dosha::Pitta);

        let scores = DoshaScores::new(0, 3, 3);
        assert_eq!(scores.primary(), Dosha::Pitta);
        assert_eq!(scores.secondary(), Dosha::Kapha);
    }

    #[test]
    fn percentages_round_each_bucket() {
        let percentages = DoshaScores::new(1, 1, 1)
            .percentages()
            .expect("non-zero total");
        assert_eq!(
            percentages,
            DoshaPercentages {
                vata: 33,
                pitta: 33,
                kapha: 33
            }
        );
        assert_eq!(percentages.sum(), 99);

        let percentages = DoshaScores::new(9, 3, 3).percentages().expect("total");
        assert_eq!(
            percentages,
            DoshaPercentages {
                vata: 60,
                pitta: 20,
                kapha: 20
            }
        );
    }

    #[test]
    fn zero_total_has_no_percentages() {
        assert_eq!(DoshaScores::default().percentages(), None);
    }

    #[test]
    fn parses_case_insensitively() {
        assert_eq!("Pitta".parse::<Dosha>(), Ok(Dosha::Pitta));
        assert_eq!(" KAPHA ".parse::<Dosha>(), Ok(Dosha::Kapha));
        assert!("rakta".parse::<Dosha>().is_err());
    }

    #[test]
    fn label_joins_capitalised_names() {
        assert_eq!(constitution_label(Dosha::Kapha, Dosha::Vata), "Kapha-Vata");
    }
}
