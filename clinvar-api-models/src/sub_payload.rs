//! The submission container in model form.
//!
//! The wire record carries seven mutually exclusive optional fields for the variant description
//! of a submission. Here they collapse into [`VariantShape`], so a [`ClinvarSubmission`] always
//! holds exactly one. Leaf records (variants, conditions, citations, ...) are the wire types
//! themselves.

use serde::Serialize;

use clinvar_api_msg as msg;
use clinvar_api_msg::{
    SubmissionAssertionCriteria, SubmissionClinicalSignificance, SubmissionCompoundHeterozygoteSet,
    SubmissionConditionSet, SubmissionDiplotypeSet, SubmissionDistinctChromosomesSet,
    SubmissionHaplotypeSet, SubmissionObservedIn, SubmissionPhaseUnknownSet, SubmissionVariantSet,
};

use crate::error::{ConversionError, Result};
use crate::sub_response::convert_all;

/// How the variant(s) of a submission are described.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub enum VariantShape {
    VariantSet(SubmissionVariantSet),
    /// Two or more variants on the same chromosome copy.
    Haplotype(SubmissionHaplotypeSet),
    HaplotypeSingleVariant(SubmissionHaplotypeSet),
    Diplotype(SubmissionDiplotypeSet),
    CompoundHeterozygote(SubmissionCompoundHeterozygoteSet),
    DistinctChromosomes(SubmissionDistinctChromosomesSet),
    PhaseUnknown(SubmissionPhaseUnknownSet),
}

impl VariantShape {
    /// Name of the wire field holding this shape.
    pub fn wire_name(&self) -> &'static str {
        match self {
            VariantShape::VariantSet(_) => "variantSet",
            VariantShape::Haplotype(_) => "haplotypeSet",
            VariantShape::HaplotypeSingleVariant(_) => "haplotypeSingleVariantSet",
            VariantShape::Diplotype(_) => "diplotypeSet",
            VariantShape::CompoundHeterozygote(_) => "compoundHeterozygoteSet",
            VariantShape::DistinctChromosomes(_) => "distinctChromosomesSet",
            VariantShape::PhaseUnknown(_) => "phaseUnknownSet",
        }
    }
}

/// One record of a submission.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ClinvarSubmission {
    clinical_significance: SubmissionClinicalSignificance,
    condition_set: SubmissionConditionSet,
    observed_in: Vec<SubmissionObservedIn>,
    record_status: String,
    release_status: String,
    variant: VariantShape,
    assertion_criteria: Option<SubmissionAssertionCriteria>,
    clinvar_accession: Option<String>,
    local_id: Option<String>,
    local_key: Option<String>,
}

impl ClinvarSubmission {
    pub fn new(
        clinical_significance: SubmissionClinicalSignificance,
        condition_set: SubmissionConditionSet,
        observed_in: Vec<SubmissionObservedIn>,
        record_status: &str,
        release_status: &str,
        variant: VariantShape,
    ) -> Self {
        ClinvarSubmission {
            clinical_significance,
            condition_set,
            observed_in,
            record_status: record_status.to_string(),
            release_status: release_status.to_string(),
            variant,
            assertion_criteria: None,
            clinvar_accession: None,
            local_id: None,
            local_key: None,
        }
    }

    pub fn with_assertion_criteria(mut self, criteria: SubmissionAssertionCriteria) -> Self {
        self.assertion_criteria = Some(criteria);
        self
    }

    /// Set the SCV accession of the record being updated.
    pub fn with_clinvar_accession(mut self, accession: &str) -> Self {
        self.clinvar_accession = Some(accession.to_string());
        self
    }

    pub fn with_local_id(mut self, local_id: &str) -> Self {
        self.local_id = Some(local_id.to_string());
        self
    }

    pub fn with_local_key(mut self, local_key: &str) -> Self {
        self.local_key = Some(local_key.to_string());
        self
    }

    pub fn clinical_significance(&self) -> &SubmissionClinicalSignificance {
        &self.clinical_significance
    }

    pub fn condition_set(&self) -> &SubmissionConditionSet {
        &self.condition_set
    }

    pub fn observed_in(&self) -> &[SubmissionObservedIn] {
        &self.observed_in
    }

    pub fn record_status(&self) -> &str {
        &self.record_status
    }

    pub fn release_status(&self) -> &str {
        &self.release_status
    }

    pub fn variant(&self) -> &VariantShape {
        &self.variant
    }

    pub fn assertion_criteria(&self) -> Option<&SubmissionAssertionCriteria> {
        self.assertion_criteria.as_ref()
    }

    pub fn clinvar_accession(&self) -> Option<&str> {
        self.clinvar_accession.as_deref()
    }

    pub fn local_id(&self) -> Option<&str> {
        self.local_id.as_deref()
    }

    pub fn local_key(&self) -> Option<&str> {
        self.local_key.as_deref()
    }
}

impl TryFrom<msg::SubmissionClinvarSubmission> for ClinvarSubmission {
    type Error = ConversionError;

    fn try_from(other: msg::SubmissionClinvarSubmission) -> Result<Self> {
        let msg::SubmissionClinvarSubmission {
            clinical_significance,
            condition_set,
            observed_in,
            record_status,
            release_status,
            assertion_criteria,
            clinvar_accession,
            compound_heterozygote_set,
            diplotype_set,
            distinct_chromosomes_set,
            haplotype_set,
            haplotype_single_variant_set,
            local_id,
            local_key,
            phase_unknown_set,
            variant_set,
        } = other;

        // wire field order
        let mut shapes: Vec<VariantShape> = [
            compound_heterozygote_set.map(VariantShape::CompoundHeterozygote),
            diplotype_set.map(VariantShape::Diplotype),
            distinct_chromosomes_set.map(VariantShape::DistinctChromosomes),
            haplotype_set.map(VariantShape::Haplotype),
            haplotype_single_variant_set.map(VariantShape::HaplotypeSingleVariant),
            phase_unknown_set.map(VariantShape::PhaseUnknown),
            variant_set.map(VariantShape::VariantSet),
        ]
        .into_iter()
        .flatten()
        .collect();

        let variant = match shapes.len() {
            0 => return Err(ConversionError::NoVariantShape),
            1 => shapes.remove(0),
            _ => {
                return Err(ConversionError::MultipleVariantShapes {
                    shapes: shapes.iter().map(VariantShape::wire_name).collect(),
                });
            }
        };

        Ok(ClinvarSubmission {
            clinical_significance,
            condition_set,
            observed_in,
            record_status,
            release_status,
            variant,
            assertion_criteria,
            clinvar_accession,
            local_id,
            local_key,
        })
    }
}

impl From<ClinvarSubmission> for msg::SubmissionClinvarSubmission {
    fn from(other: ClinvarSubmission) -> Self {
        let ClinvarSubmission {
            clinical_significance,
            condition_set,
            observed_in,
            record_status,
            release_status,
            variant,
            assertion_criteria,
            clinvar_accession,
            local_id,
            local_key,
        } = other;

        let mut submission = msg::SubmissionClinvarSubmission {
            clinical_significance,
            condition_set,
            observed_in,
            record_status,
            release_status,
            assertion_criteria,
            clinvar_accession,
            compound_heterozygote_set: None,
            diplotype_set: None,
            distinct_chromosomes_set: None,
            haplotype_set: None,
            haplotype_single_variant_set: None,
            local_id,
            local_key,
            phase_unknown_set: None,
            variant_set: None,
        };
        match variant {
            VariantShape::VariantSet(set) => submission.variant_set = Some(set),
            VariantShape::Haplotype(set) => submission.haplotype_set = Some(set),
            VariantShape::HaplotypeSingleVariant(set) => {
                submission.haplotype_single_variant_set = Some(set)
            }
            VariantShape::Diplotype(set) => submission.diplotype_set = Some(set),
            VariantShape::CompoundHeterozygote(set) => {
                submission.compound_heterozygote_set = Some(set)
            }
            VariantShape::DistinctChromosomes(set) => {
                submission.distinct_chromosomes_set = Some(set)
            }
            VariantShape::PhaseUnknown(set) => submission.phase_unknown_set = Some(set),
        }
        submission
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct DeletionAccession {
    accession: String,
    reason: Option<String>,
}

impl DeletionAccession {
    pub fn new(accession: &str, reason: Option<&str>) -> Self {
        DeletionAccession {
            accession: accession.to_string(),
            reason: reason.map(str::to_string),
        }
    }

    pub fn accession(&self) -> &str {
        &self.accession
    }

    pub fn reason(&self) -> Option<&str> {
        self.reason.as_deref()
    }
}

impl From<msg::SubmissionClinvarDeletionAccessionSet> for DeletionAccession {
    fn from(other: msg::SubmissionClinvarDeletionAccessionSet) -> Self {
        let msg::SubmissionClinvarDeletionAccessionSet { accession, reason } = other;
        DeletionAccession { accession, reason }
    }
}

impl From<DeletionAccession> for msg::SubmissionClinvarDeletionAccessionSet {
    fn from(other: DeletionAccession) -> Self {
        let DeletionAccession { accession, reason } = other;
        msg::SubmissionClinvarDeletionAccessionSet { accession, reason }
    }
}

/// Records to remove from ClinVar.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct ClinvarDeletion {
    accessions: Vec<DeletionAccession>,
}

impl ClinvarDeletion {
    pub fn new(accessions: Vec<DeletionAccession>) -> Self {
        ClinvarDeletion { accessions }
    }

    pub fn accessions(&self) -> &[DeletionAccession] {
        &self.accessions
    }
}

impl From<msg::SubmissionClinvarDeletion> for ClinvarDeletion {
    fn from(other: msg::SubmissionClinvarDeletion) -> Self {
        let msg::SubmissionClinvarDeletion { accession_set } = other;
        ClinvarDeletion {
            accessions: convert_all(accession_set),
        }
    }
}

impl From<ClinvarDeletion> for msg::SubmissionClinvarDeletion {
    fn from(other: ClinvarDeletion) -> Self {
        msg::SubmissionClinvarDeletion {
            accession_set: convert_all(other.accessions),
        }
    }
}

/// The payload of a submission to the ClinVar API.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct SubmissionContainer {
    behalf_org_id: Option<u64>,
    clinvar_deletion: Option<ClinvarDeletion>,
    clinvar_submission: Option<Vec<ClinvarSubmission>>,
    submission_name: Option<String>,
}

impl SubmissionContainer {
    /// Submit on behalf of another organization.
    pub fn with_behalf_org_id(mut self, org_id: u64) -> Self {
        self.behalf_org_id = Some(org_id);
        self
    }

    pub fn with_clinvar_deletion(mut self, deletion: ClinvarDeletion) -> Self {
        self.clinvar_deletion = Some(deletion);
        self
    }

    pub fn with_clinvar_submission(mut self, submissions: Vec<ClinvarSubmission>) -> Self {
        self.clinvar_submission = Some(submissions);
        self
    }

    pub fn with_submission_name(mut self, name: &str) -> Self {
        self.submission_name = Some(name.to_string());
        self
    }

    pub fn behalf_org_id(&self) -> Option<u64> {
        self.behalf_org_id
    }

    pub fn clinvar_deletion(&self) -> Option<&ClinvarDeletion> {
        self.clinvar_deletion.as_ref()
    }

    pub fn clinvar_submission(&self) -> Option<&[ClinvarSubmission]> {
        self.clinvar_submission.as_deref()
    }

    pub fn submission_name(&self) -> Option<&str> {
        self.submission_name.as_deref()
    }
}

impl TryFrom<msg::SubmissionContainer> for SubmissionContainer {
    type Error = ConversionError;

    fn try_from(other: msg::SubmissionContainer) -> Result<Self> {
        let msg::SubmissionContainer {
            behalf_org_id,
            clinvar_deletion,
            clinvar_submission,
            submission_name,
        } = other;

        let clinvar_submission = match clinvar_submission {
            Some(submissions) => {
                let mut converted = Vec::with_capacity(submissions.len());
                for (index, submission) in submissions.into_iter().enumerate() {
                    let submission = ClinvarSubmission::try_from(submission).map_err(|e| {
                        log::debug!("Rejecting submission at index {}: {}", index, e);
                        ConversionError::Submission {
                            index,
                            source: Box::new(e),
                        }
                    })?;
                    converted.push(submission);
                }
                Some(converted)
            }
            None => None,
        };

        Ok(SubmissionContainer {
            behalf_org_id,
            clinvar_deletion: clinvar_deletion.map(Into::into),
            clinvar_submission,
            submission_name,
        })
    }
}

impl From<SubmissionContainer> for msg::SubmissionContainer {
    fn from(other: SubmissionContainer) -> Self {
        let SubmissionContainer {
            behalf_org_id,
            clinvar_deletion,
            clinvar_submission,
            submission_name,
        } = other;
        msg::SubmissionContainer {
            behalf_org_id,
            clinvar_deletion: clinvar_deletion.map(Into::into),
            clinvar_submission: clinvar_submission.map(convert_all),
            submission_name,
        }
    }
}
