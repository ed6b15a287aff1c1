use serde::Serialize;

use crate::knowledge::recommendations::{constitution_references, regimen, yoga_blocks};
use crate::knowledge::{AdviceBlock, Citation, Dosha};

/// Everything advised for one primary dosha, straight from the static tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Recommendations {
    pub diet: &'static [AdviceBlock],
    pub lifestyle: &'static [AdviceBlock],
    pub herbs: &'static [AdviceBlock],
    pub yoga: &'static [AdviceBlock],
    pub classical_references: &'static [Citation],
}

impl Recommendations {
    /// Lifestyle practices flattened into one list.
    pub fn lifestyle_practices(&self) -> Vec<&'static str> {
        self.lifestyle
            .iter()
            .flat_map(|block| block.items.iter().copied())
            .collect()
    }
}

pub fn recommendations_for(primary: Dosha) -> Recommendations {
    let regimen = regimen(primary);
    Recommendations {
        diet: regimen.diet,
        lifestyle: regimen.lifestyle,
        herbs: regimen.herbs,
        yoga: yoga_blocks(primary),
        classical_references: constitution_references(),
    }
}
