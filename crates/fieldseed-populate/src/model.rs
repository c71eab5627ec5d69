use fieldseed_core::ValueCategory;

/// Why a field kept its previous value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// The exclusion policy matched the field.
    Excluded,
    /// The declared type is outside the supported categories and the
    /// composite policy did not claim it.
    Unsupported,
}

/// Result of one field decision.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldOutcome {
    /// A value of this category was assigned.
    Populated(ValueCategory),
    /// A nested object was built and populated.
    Composite(PopulationReport),
    Skipped(SkipReason),
}

impl FieldOutcome {
    /// Whether the field consumed a position slot.
    pub fn is_populated(&self) -> bool {
        !matches!(self, FieldOutcome::Skipped(_))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SkippedField {
    pub field: &'static str,
    pub reason: SkipReason,
}

/// What a population pass did to one object.
#[derive(Debug, Clone, PartialEq)]
pub struct PopulationReport {
    pub seed: i64,
    /// Populated fields, indexed by the position they consumed.
    pub populated: Vec<&'static str>,
    pub skipped: Vec<SkippedField>,
    /// Reports of nested composites, keyed by field name.
    pub nested: Vec<(&'static str, PopulationReport)>,
}

impl PopulationReport {
    pub fn new(seed: i64) -> Self {
        Self {
            seed,
            populated: Vec::new(),
            skipped: Vec::new(),
            nested: Vec::new(),
        }
    }

    /// Position the named field was populated at.
    pub fn position_of(&self, field: &str) -> Option<u32> {
        self.populated
            .iter()
            .position(|name| *name == field)
            .map(|idx| idx as u32)
    }

    pub fn was_skipped(&self, field: &str) -> Option<SkipReason> {
        self.skipped
            .iter()
            .find(|skipped| skipped.field == field)
            .map(|skipped| skipped.reason)
    }

    pub fn nested(&self, field: &str) -> Option<&PopulationReport> {
        self.nested
            .iter()
            .find(|(name, _)| *name == field)
            .map(|(_, report)| report)
    }

    pub(crate) fn record(&mut self, field: &'static str, outcome: FieldOutcome) {
        match outcome {
            FieldOutcome::Populated(_) => self.populated.push(field),
            FieldOutcome::Composite(report) => {
                self.populated.push(field);
                self.nested.push((field, report));
            }
            FieldOutcome::Skipped(reason) => self.skipped.push(SkippedField { field, reason }),
        }
    }

    /// Next position to hand out.
    pub(crate) fn next_position(&self) -> u32 {
        self.populated.len() as u32
    }
}
