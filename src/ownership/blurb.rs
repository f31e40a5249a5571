//! Project statistics narrative ("bus factor" blurb).

use serde::{Deserialize, Serialize};
use std::fmt::Write;

/// Languages named in the blurb.
const MAX_NAMED_LANGUAGES: usize = 3;

/// Fewer owners than this is a low bus factor.
const LOW_BUS_FACTOR: usize = 5;

/// Fewer owners than this (and at least [`LOW_BUS_FACTOR`]) is a neutral bus factor.
const NEUTRAL_BUS_FACTOR: usize = 15;

/// Owners holding more than this share of files are listed as relied upon.
const RELIED_UPON_SHARE: f64 = 0.1;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeFacetLanguage {
    pub language_name: String,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeFacetOwner {
    pub owner: String,
    /// Files this owner is attributed.
    pub count: u64,
}

/// Aggregate breakdown of a project.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectStats {
    pub total_files: u64,
    /// Sorted by prevalence, most common first.
    pub languages: Vec<CodeFacetLanguage>,
    /// Sorted by contribution, largest first.
    pub owners: Vec<CodeFacetOwner>,
}

/// Describe a project's contributors, languages and bus factor in a few sentences.
///
/// The wording is fixed; existing consumers match on it.
pub fn generate_bus_blurb(stats: &ProjectStats) -> String {
    let owners = &stats.owners;
    let mut blurb = format!("In this repository {}", owners.len());

    blurb.push_str(if owners.len() == 1 {
        " committer has contributed to "
    } else {
        " committers have contributed to "
    });

    if stats.total_files == 1 {
        let _ = write!(blurb, "{} file. ", stats.total_files);
    } else {
        let _ = write!(blurb, "{} files. ", stats.total_files);
    }

    if let [language] = stats.languages.as_slice() {
        let _ = write!(
            blurb,
            "The most important language in this repository is {}. ",
            language.language_name
        );
    } else {
        blurb.push_str("The most important languages in this repository are ");

        let named = &stats.languages[..stats.languages.len().min(MAX_NAMED_LANGUAGES)];
        if let Some((last, rest)) = named.split_last() {
            for language in rest {
                let _ = write!(blurb, "{}, ", language.language_name);
            }
            let _ = write!(blurb, " and {}. ", last.language_name);
        }
    }

    if let Some(top) = owners.first() {
        let count = owners.len();
        if count < LOW_BUS_FACTOR {
            let _ = write!(
                blurb,
                "The project has a low bus factor of {} and will be in trouble if {} is hit by a bus. ",
                count, top.owner
            );
        } else if count < NEUTRAL_BUS_FACTOR {
            let _ = write!(blurb, "The project has bus factor of {}. ", count);
        } else {
            let _ = write!(blurb, "The project has high bus factor of {}. ", count);
        }
    }

    let mut relied_upon = Vec::new();
    let mut share_sum = 0.0_f64;
    for owner in owners {
        let share = owner.count as f64 / stats.total_files as f64;
        share_sum += share;

        if share > RELIED_UPON_SHARE {
            relied_upon.push(owner.owner.as_str());
        }
    }

    // No owners gives NaN, which the cast turns into 0.
    let average_ownership = (share_sum / owners.len() as f64 * 100.0) as i32;
    let _ = write!(
        blurb,
        "The average person who commits this project has ownership of {}% of files. ",
        average_ownership
    );

    if !relied_upon.is_empty() {
        let _ = write!(
            blurb,
            "The project relies on the following people; {}. ",
            relied_upon.join(", ")
        );
    }

    blurb.replace(",  and", " and")
}
