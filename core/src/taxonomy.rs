// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use vidmark_client::{EventDefinition, EventId, EventOption, OptionId};

use crate::error::Error;
use crate::language::Language;

/// The loaded event definition taxonomy.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Taxonomy {
    definitions: Vec<EventDefinition>,
}

impl Taxonomy {
    /// Wraps the definitions served by the backend.
    #[must_use]
    pub const fn new(definitions: Vec<EventDefinition>) -> Self {
        Self { definitions }
    }

    /// All definitions, in server order.
    #[must_use]
    pub fn definitions(&self) -> &[EventDefinition] {
        &self.definitions
    }

    /// The first definition whose `event_id` matches.
    #[must_use]
    pub fn find_event_definition_by_event_id(&self, event_id: EventId) -> Option<&EventDefinition> {
        self.definitions.iter().find(|d| d.event_id == event_id)
    }

    /// Like [`Self::find_event_definition_by_event_id`], but a miss is an error.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownEvent`] if no definition matches.
    pub fn require(&self, event_id: EventId) -> Result<&EventDefinition, Error> {
        self.find_event_definition_by_event_id(event_id)
            .ok_or(Error::UnknownEvent(event_id))
    }
}

/// All options of a definition across its option groups, in group order.
#[must_use]
pub fn flatten_options(definition: &EventDefinition) -> Vec<&EventOption> {
    definition
        .option_groups
        .iter()
        .flat_map(|group| group.options.iter())
        .collect()
}

/// Resolves a comma-separated option code list to its labels joined by `", "`, keeping the
/// order of the codes.
///
/// # Errors
///
/// Returns [`Error::InvalidOptionCode`] for a code that is not an integer and
/// [`Error::UnknownOption`] for one that is not an option of `definition`. Codes are trimmed,
/// then parsed whole: trailing garbage such as `"3abc"` is rejected, not read as `3`.
pub fn resolve_option_labels(
    definition: &EventDefinition,
    option_code: &str,
    language: Language,
) -> Result<String, Error> {
    let options = flatten_options(definition);
    let labels = option_code
        .split(',')
        .map(|code| {
            let option_id: OptionId = code
                .trim()
                .parse()
                .map_err(|_| Error::InvalidOptionCode(code.to_string()))?;

            options
                .iter()
                .find(|option| option.option_id == option_id)
                .map(|option| language.pick(&option.desc))
                .ok_or(Error::UnknownOption {
                    event_id: definition.event_id,
                    option_id,
                })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(labels.join(", "))
}

#[cfg(test)]
mod tests {
    use vidmark_client::{Localized, OptionGroup};

    use super::*;

    fn option(option_id: OptionId, local: &str, english: &str) -> EventOption {
        EventOption {
            option_id,
            desc: Localized::new(local, english),
        }
    }

    fn definition() -> EventDefinition {
        EventDefinition {
            event_id: 2,
            desc: Localized::new("跌倒", "Fall"),
            option_groups: vec![
                OptionGroup {
                    options: vec![option(3, "甲", "A"), option(4, "丙", "C")],
                },
                OptionGroup {
                    options: vec![option(7, "乙", "B")],
                },
            ],
        }
    }

    #[test]
    fn finds_first_matching_definition() {
        let mut shadow = definition();
        shadow.desc = Localized::new("重复", "Duplicate");
        let taxonomy = Taxonomy::new(vec![definition(), shadow]);

        let found = taxonomy.find_event_definition_by_event_id(2).unwrap();
        assert_eq!(found.desc.english(), "Fall");
        assert!(taxonomy.find_event_definition_by_event_id(9).is_none());
        assert!(matches!(taxonomy.require(9), Err(Error::UnknownEvent(9))));
    }

    #[test]
    fn flattens_groups_in_order() {
        let def = definition();
        let ids: Vec<_> = flatten_options(&def).iter().map(|o| o.option_id).collect();
        assert_eq!(ids, vec![3, 4, 7]);
    }

    #[test]
    fn resolves_labels_in_code_order() {
        let def = definition();
        assert_eq!(
            resolve_option_labels(&def, "3,7", Language::Local).unwrap(),
            "甲, 乙"
        );
        assert_eq!(
            resolve_option_labels(&def, "3,7", Language::English).unwrap(),
            "A, B"
        );
        assert_eq!(
            resolve_option_labels(&def, "7, 3", Language::English).unwrap(),
            "B, A"
        );
    }

    #[test]
    fn rejects_unknown_and_malformed_codes() {
        let def = definition();
        assert!(matches!(
            resolve_option_labels(&def, "3,8", Language::Local),
            Err(Error::UnknownOption {
                event_id: 2,
                option_id: 8
            })
        ));
        assert!(matches!(
            resolve_option_labels(&def, "3,x", Language::Local),
            Err(Error::InvalidOptionCode(code)) if code == "x"
        ));
        assert!(matches!(
            resolve_option_labels(&def, "3abc", Language::Local),
            Err(Error::InvalidOptionCode(code)) if code == "3abc"
        ));
        assert!(matches!(
            resolve_option_labels(&def, "", Language::Local),
            Err(Error::InvalidOptionCode(_))
        ));
    }
}
