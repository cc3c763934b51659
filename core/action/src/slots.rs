//! Fixed output layout of a protected action, computed once when the action is declared.
use std::collections::BTreeMap;
use std::collections::BTreeSet;

use anyhow::Result;

use dashgate_auth::Verdict;

use crate::errors::DuplicateOutputKey;
use crate::errors::DuplicateOutputRef;
use crate::errors::MappingKeysMismatch;
use crate::errors::ReturnLengthMismatch;
use crate::errors::ReturnNotList;
use crate::errors::ReturnNotMapping;
use crate::errors::ReturnNotScalar;
use crate::errors::ReturnedValueWithoutOutputs;
use crate::ActionOutputs;
use crate::ActionReturn;
use crate::DeclaredOutputs;
use crate::OutputValue;
use crate::PropertyRef;

/// Shape of the values produced for all output slots of an action.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum OutputShape {
    /// No output slots: no values are produced.
    Empty,

    /// Exactly one positional slot: a bare value is produced.
    Scalar,

    /// Two or more positional slots: a sequence of values is produced.
    Sequence,

    /// Named slots: a mapping of values is produced.
    Mapping,
}

/// Values for the declared outputs before denial slots are appended.
enum DeclaredValues {
    List(Vec<OutputValue>),
    Mapping(BTreeMap<String, OutputValue>),
}

/// Output slots of an action: the declared outputs followed by the configured denial slots.
///
/// The slots and their [`OutputShape`] are fixed for the lifetime of the action.
#[derive(Clone, Debug, PartialEq)]
pub struct OutputSlots {
    declared: DeclaredOutputs,
    missing_permission: Option<PropertyRef>,
    n_outputs: usize,
    shape: OutputShape,
    unauthenticated: Option<PropertyRef>,
}

impl OutputSlots {
    /// Compute the output slots for the declared outputs and optional denial modals.
    ///
    /// Denial slots are the `is_open` property of the given modals and are appended
    /// after the declared outputs: "unauthenticated" first, "missing permission" second.
    pub fn new(
        declared: DeclaredOutputs,
        unauthenticated_modal: Option<&str>,
        missing_permission_modal: Option<&str>,
    ) -> Result<OutputSlots> {
        let unauthenticated = unauthenticated_modal
            .map(PropertyRef::modal_open)
            .transpose()?;
        let missing_permission = missing_permission_modal
            .map(PropertyRef::modal_open)
            .transpose()?;
        let n_outputs = declared.len();
        let n_denial =
            usize::from(unauthenticated.is_some()) + usize::from(missing_permission.is_some());

        let bound: Vec<&PropertyRef> = match &declared {
            DeclaredOutputs::List(outputs) => outputs.iter().collect(),
            DeclaredOutputs::Mapping(outputs) => outputs.values().collect(),
        };
        let bound = bound
            .into_iter()
            .chain(unauthenticated.iter())
            .chain(missing_permission.iter());
        let mut seen = BTreeSet::new();
        for slot in bound {
            let reference = slot.to_string();
            if !seen.insert(reference.clone()) {
                anyhow::bail!(DuplicateOutputRef { reference });
            }
        }

        let shape = match &declared {
            DeclaredOutputs::Mapping(outputs) if !outputs.is_empty() => {
                let denial = unauthenticated.iter().chain(missing_permission.iter());
                for slot in denial {
                    let key = slot.to_string();
                    if outputs.contains_key(&key) {
                        anyhow::bail!(DuplicateOutputKey { key });
                    }
                }
                OutputShape::Mapping
            }
            _ => match n_outputs + n_denial {
                0 => OutputShape::Empty,
                1 => OutputShape::Scalar,
                _ => OutputShape::Sequence,
            },
        };

        Ok(OutputSlots {
            declared,
            missing_permission,
            n_outputs,
            shape,
            unauthenticated,
        })
    }

    /// Total number of output slots, denial slots included.
    pub fn arity(&self) -> usize {
        self.n_outputs + self.denial_count()
    }

    /// The outputs declared by the action, without denial slots.
    pub fn declared(&self) -> &DeclaredOutputs {
        &self.declared
    }

    /// Number of denial slots appended to the declared outputs.
    pub fn denial_count(&self) -> usize {
        self.denial_slots(false, false).count()
    }

    /// Values for all slots when the caller is denied access.
    ///
    /// Declared outputs are left unchanged while denial slots are set according to the verdict.
    /// This is the only place denied results are assembled, whatever the output shape.
    pub fn denied(&self, verdict: Verdict) -> ActionOutputs {
        let values = match &self.declared {
            DeclaredOutputs::Mapping(outputs) if self.shape == OutputShape::Mapping => {
                let values = outputs
                    .keys()
                    .map(|key| (key.clone(), OutputValue::Unchanged))
                    .collect();
                DeclaredValues::Mapping(values)
            }
            _ => DeclaredValues::List(vec![OutputValue::Unchanged; self.n_outputs]),
        };
        let (unauthenticated, missing_permission) = match verdict {
            Verdict::Allowed => (false, false),
            Verdict::Unauthenticated => (true, false),
            Verdict::Forbidden => (false, true),
        };
        self.assemble(values, unauthenticated, missing_permission)
    }

    /// Check the value returned by the action function and clear all denial slots.
    ///
    /// The returned value must match the declared outputs exactly:
    ///
    /// - No outputs: the function must return [`ActionReturn::Nothing`].
    /// - Named outputs: an [`ActionReturn::Mapping`] with exactly the declared keys.
    /// - One positional output: an [`ActionReturn::Value`].
    /// - Several positional outputs: an [`ActionReturn::List`] with one value per output.
    ///
    /// Values are never reshaped or coerced.
    pub fn granted(&self, action: &str, returned: ActionReturn) -> Result<ActionOutputs> {
        if self.n_outputs == 0 {
            if returned != ActionReturn::Nothing {
                anyhow::bail!(ReturnedValueWithoutOutputs::from(action));
            }
            return Ok(self.assemble(DeclaredValues::List(Vec::new()), false, false));
        }

        let values = match &self.declared {
            DeclaredOutputs::Mapping(outputs) => {
                let values = match returned {
                    ActionReturn::Mapping(values) => values,
                    _ => anyhow::bail!(ReturnNotMapping::from(action)),
                };
                let declared: BTreeSet<String> = outputs.keys().cloned().collect();
                let returned: BTreeSet<String> = values.keys().cloned().collect();
                if declared != returned {
                    anyhow::bail!(MappingKeysMismatch {
                        action: action.to_string(),
                        declared,
                        returned,
                    });
                }
                let values = values
                    .into_iter()
                    .map(|(key, value)| (key, OutputValue::Value(value)))
                    .collect();
                DeclaredValues::Mapping(values)
            }
            DeclaredOutputs::List(_) if self.n_outputs == 1 => match returned {
                ActionReturn::Value(value) => DeclaredValues::List(vec![OutputValue::Value(value)]),
                _ => anyhow::bail!(ReturnNotScalar::from(action)),
            },
            DeclaredOutputs::List(_) => {
                let values = match returned {
                    ActionReturn::List(values) => values,
                    _ => anyhow::bail!(ReturnNotList::from(action)),
                };
                if values.len() != self.n_outputs {
                    anyhow::bail!(ReturnLengthMismatch {
                        action: action.to_string(),
                        declared: self.n_outputs,
                        returned: values.len(),
                    });
                }
                let values = values.into_iter().map(OutputValue::Value).collect();
                DeclaredValues::List(values)
            }
        };
        Ok(self.assemble(values, false, false))
    }

    /// Number of declared outputs, without denial slots.
    pub fn n_outputs(&self) -> usize {
        self.n_outputs
    }

    /// Pair each value with the property reference of its output slot.
    ///
    /// Values are expected to come from [`OutputSlots::granted`] or [`OutputSlots::denied`]
    /// on the same slots and values without a matching slot are skipped.
    pub fn pair(&self, outputs: ActionOutputs) -> Vec<(PropertyRef, OutputValue)> {
        match outputs {
            ActionOutputs::None => Vec::new(),
            ActionOutputs::Scalar(value) => self
                .references()
                .into_iter()
                .take(1)
                .map(|slot| (slot.clone(), value.clone()))
                .collect(),
            ActionOutputs::Sequence(values) => self
                .references()
                .into_iter()
                .cloned()
                .zip(values)
                .collect(),
            ActionOutputs::Mapping(values) => {
                let slots = self.keyed_references();
                values
                    .into_iter()
                    .filter_map(|(key, value)| {
                        slots.get(&key).map(|slot| ((*slot).clone(), value))
                    })
                    .collect()
            }
        }
    }

    /// Property references of all slots in order, denial slots last.
    pub fn references(&self) -> Vec<&PropertyRef> {
        let declared: Vec<&PropertyRef> = match &self.declared {
            DeclaredOutputs::List(outputs) => outputs.iter().collect(),
            DeclaredOutputs::Mapping(outputs) => outputs.values().collect(),
        };
        let denial = self.denial_slots(false, false).map(|(slot, _)| slot);
        declared.into_iter().chain(denial).collect()
    }

    /// Shape of the values produced for the slots.
    pub fn shape(&self) -> OutputShape {
        self.shape
    }
}

impl OutputSlots {
    /// Append the denial flags to the declared values and wrap them into the slots shape.
    fn assemble(
        &self,
        values: DeclaredValues,
        unauthenticated: bool,
        missing_permission: bool,
    ) -> ActionOutputs {
        let flags = self.denial_slots(unauthenticated, missing_permission);
        match values {
            DeclaredValues::Mapping(mut values) => {
                for (slot, flag) in flags {
                    values.insert(slot.to_string(), OutputValue::from(flag));
                }
                ActionOutputs::Mapping(values)
            }
            DeclaredValues::List(mut values) => {
                values.extend(flags.map(|(_, flag)| OutputValue::from(flag)));
                match self.shape {
                    OutputShape::Empty => ActionOutputs::None,
                    OutputShape::Scalar => match values.pop() {
                        Some(value) => ActionOutputs::Scalar(value),
                        None => ActionOutputs::None,
                    },
                    OutputShape::Sequence | OutputShape::Mapping => ActionOutputs::Sequence(values),
                }
            }
        }
    }

    /// Iterate over configured denial slots with the flag to set on each.
    fn denial_slots(
        &self,
        unauthenticated: bool,
        missing_permission: bool,
    ) -> impl Iterator<Item = (&PropertyRef, bool)> {
        let unauthenticated = self
            .unauthenticated
            .iter()
            .map(move |slot| (slot, unauthenticated));
        let missing_permission = self
            .missing_permission
            .iter()
            .map(move |slot| (slot, missing_permission));
        unauthenticated.chain(missing_permission)
    }

    /// Map slot keys to property references for named outputs.
    fn keyed_references(&self) -> BTreeMap<String, &PropertyRef> {
        let mut slots: BTreeMap<String, &PropertyRef> = match &self.declared {
            DeclaredOutputs::Mapping(outputs) => outputs
                .iter()
                .map(|(key, slot)| (key.clone(), slot))
                .collect(),
            DeclaredOutputs::List(_) => BTreeMap::new(),
        };
        for (slot, _) in self.denial_slots(false, false) {
            slots.insert(slot.to_string(), slot);
        }
        slots
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;
    use std::collections::BTreeSet;

    use serde_json::json;

    use dashgate_auth::Verdict;

    use super::OutputShape;
    use super::OutputSlots;
    use crate::errors::DuplicateOutputKey;
    use crate::errors::DuplicateOutputRef;
    use crate::errors::MappingKeysMismatch;
    use crate::errors::ReturnLengthMismatch;
    use crate::errors::ReturnNotList;
    use crate::errors::ReturnNotMapping;
    use crate::errors::ReturnNotScalar;
    use crate::errors::ReturnedValueWithoutOutputs;
    use crate::ActionOutputs;
    use crate::ActionReturn;
    use crate::DeclaredOutputs;
    use crate::OutputValue;

    const UNAUTHENTICATED: Option<&str> = Some("unauthenticated-modal");
    const MISSING_PERMISSION: Option<&str> = Some("missing-permission-modal");

    fn chart() -> DeclaredOutputs {
        DeclaredOutputs::list(["chart.figure"]).unwrap()
    }

    fn mapping() -> DeclaredOutputs {
        DeclaredOutputs::mapping([("a", "chart.figure"), ("b", "text.children")]).unwrap()
    }

    fn slots_for(
        declared: DeclaredOutputs,
        unauthenticated: bool,
        missing_permission: bool,
    ) -> OutputSlots {
        let unauthenticated = unauthenticated.then(|| "unauthenticated-modal");
        let missing_permission = missing_permission.then(|| "missing-permission-modal");
        OutputSlots::new(declared, unauthenticated, missing_permission).unwrap()
    }

    #[test]
    fn arity_counts_denial_slots() {
        let declarations = [
            DeclaredOutputs::default(),
            chart(),
            DeclaredOutputs::list(["a.b", "c.d", "e.f"]).unwrap(),
            mapping(),
        ];
        for declared in declarations {
            for unauthenticated in [false, true] {
                for missing_permission in [false, true] {
                    let slots = slots_for(declared.clone(), unauthenticated, missing_permission);
                    let expected = declared.len()
                        + usize::from(unauthenticated)
                        + usize::from(missing_permission);
                    assert_eq!(slots.arity(), expected);
                    assert_eq!(slots.references().len(), expected);
                    assert_eq!(slots.denied(Verdict::Unauthenticated).arity(), expected);
                    assert_eq!(slots.denied(Verdict::Forbidden).arity(), expected);
                }
            }
        }
    }

    #[test]
    fn granted_results_match_arity() {
        let returns = [
            (DeclaredOutputs::default(), ActionReturn::Nothing),
            (chart(), ActionReturn::Value(json!("figure"))),
            (
                DeclaredOutputs::list(["a.b", "c.d"]).unwrap(),
                ActionReturn::List(vec![json!(1), json!(2)]),
            ),
            (
                mapping(),
                ActionReturn::Mapping(BTreeMap::from([
                    ("a".to_string(), json!(1)),
                    ("b".to_string(), json!(2)),
                ])),
            ),
        ];
        for (declared, returned) in returns {
            for unauthenticated in [false, true] {
                for missing_permission in [false, true] {
                    let slots = slots_for(declared.clone(), unauthenticated, missing_permission);
                    let outputs = slots.granted("test", returned.clone()).unwrap();
                    assert_eq!(outputs.arity(), slots.arity());
                }
            }
        }
    }

    #[test]
    fn shapes() {
        assert_eq!(slots_for(DeclaredOutputs::default(), false, false).shape(), OutputShape::Empty);
        assert_eq!(slots_for(DeclaredOutputs::default(), true, false).shape(), OutputShape::Scalar);
        assert_eq!(slots_for(DeclaredOutputs::default(), true, true).shape(), OutputShape::Sequence);
        assert_eq!(slots_for(chart(), false, false).shape(), OutputShape::Scalar);
        assert_eq!(slots_for(chart(), false, true).shape(), OutputShape::Sequence);
        assert_eq!(slots_for(mapping(), false, false).shape(), OutputShape::Mapping);
        assert_eq!(slots_for(mapping(), true, true).shape(), OutputShape::Mapping);
        let empty_mapping = DeclaredOutputs::Mapping(BTreeMap::new());
        assert_eq!(slots_for(empty_mapping, false, true).shape(), OutputShape::Scalar);
    }

    #[test]
    fn forbidden_with_both_slots() {
        let slots = OutputSlots::new(chart(), UNAUTHENTICATED, MISSING_PERMISSION).unwrap();
        let outputs = slots.denied(Verdict::Forbidden);
        let expected = ActionOutputs::Sequence(vec![
            OutputValue::Unchanged,
            OutputValue::from(false),
            OutputValue::from(true),
        ]);
        assert_eq!(outputs, expected);
    }

    #[test]
    fn unauthenticated_with_both_slots() {
        let slots = OutputSlots::new(chart(), UNAUTHENTICATED, MISSING_PERMISSION).unwrap();
        let outputs = slots.denied(Verdict::Unauthenticated);
        let expected = ActionOutputs::Sequence(vec![
            OutputValue::Unchanged,
            OutputValue::from(true),
            OutputValue::from(false),
        ]);
        assert_eq!(outputs, expected);
    }

    #[test]
    fn denied_with_single_slot() {
        let slots = OutputSlots::new(chart(), None, MISSING_PERMISSION).unwrap();
        let expected = ActionOutputs::Sequence(vec![OutputValue::Unchanged, OutputValue::from(false)]);
        assert_eq!(slots.denied(Verdict::Unauthenticated), expected);
        let expected = ActionOutputs::Sequence(vec![OutputValue::Unchanged, OutputValue::from(true)]);
        assert_eq!(slots.denied(Verdict::Forbidden), expected);
    }

    #[test]
    fn denied_without_slots_is_silent() {
        let slots = OutputSlots::new(chart(), None, None).unwrap();
        let outputs = slots.denied(Verdict::Forbidden);
        assert_eq!(outputs, ActionOutputs::Scalar(OutputValue::Unchanged));

        let slots = OutputSlots::new(DeclaredOutputs::default(), None, None).unwrap();
        assert_eq!(slots.denied(Verdict::Unauthenticated), ActionOutputs::None);
    }

    #[test]
    fn denied_without_outputs_and_single_slot_is_scalar() {
        let slots = OutputSlots::new(DeclaredOutputs::default(), UNAUTHENTICATED, None).unwrap();
        let outputs = slots.denied(Verdict::Unauthenticated);
        assert_eq!(outputs, ActionOutputs::Scalar(OutputValue::from(true)));
        let outputs = slots.granted("test", ActionReturn::Nothing).unwrap();
        assert_eq!(outputs, ActionOutputs::Scalar(OutputValue::from(false)));
    }

    #[test]
    fn denied_mapping() {
        let slots = OutputSlots::new(mapping(), UNAUTHENTICATED, MISSING_PERMISSION).unwrap();
        let outputs = slots.denied(Verdict::Forbidden);
        let expected = ActionOutputs::Mapping(BTreeMap::from([
            ("a".to_string(), OutputValue::Unchanged),
            ("b".to_string(), OutputValue::Unchanged),
            ("missing-permission-modal.is_open".to_string(), OutputValue::from(true)),
            ("unauthenticated-modal.is_open".to_string(), OutputValue::from(false)),
        ]));
        assert_eq!(outputs, expected);
    }

    #[test]
    fn granted_clears_denial_slots() {
        let slots = OutputSlots::new(chart(), UNAUTHENTICATED, MISSING_PERMISSION).unwrap();
        let outputs = slots
            .granted("test", ActionReturn::Value(json!({"data": []})))
            .unwrap();
        let expected = ActionOutputs::Sequence(vec![
            OutputValue::from(json!({"data": []})),
            OutputValue::from(false),
            OutputValue::from(false),
        ]);
        assert_eq!(outputs, expected);
    }

    #[test]
    fn granted_scalar_keeps_value() {
        let slots = OutputSlots::new(chart(), None, None).unwrap();
        let outputs = slots.granted("test", ActionReturn::Value(json!(null))).unwrap();
        assert_eq!(outputs, ActionOutputs::Scalar(OutputValue::from(json!(null))));
    }

    #[test]
    fn granted_value_without_outputs() {
        let slots = OutputSlots::new(DeclaredOutputs::default(), UNAUTHENTICATED, None).unwrap();
        let error = slots
            .granted("test", ActionReturn::Value(json!(null)))
            .unwrap_err();
        assert!(error.is::<ReturnedValueWithoutOutputs>());
    }

    #[test]
    fn granted_mapping_requires_mapping() {
        let slots = OutputSlots::new(mapping(), None, None).unwrap();
        let error = slots
            .granted("test", ActionReturn::List(vec![json!(1), json!(2)]))
            .unwrap_err();
        assert!(error.is::<ReturnNotMapping>());
    }

    #[test]
    fn granted_mapping_keys_mismatch() {
        let slots = OutputSlots::new(mapping(), None, None).unwrap();
        let returned = BTreeMap::from([("a".to_string(), json!(1))]);
        let error = slots
            .granted("test", ActionReturn::Mapping(returned))
            .unwrap_err();
        let message = error.to_string();
        let error = error.downcast::<MappingKeysMismatch>().unwrap();
        assert_eq!(error.returned, BTreeSet::from(["a".to_string()]));
        assert_eq!(
            error.declared,
            BTreeSet::from(["a".to_string(), "b".to_string()]),
        );
        assert!(message.contains(r#"{"a"}"#), "got: {message}");
        assert!(message.contains(r#"{"a", "b"}"#), "got: {message}");
    }

    #[test]
    fn granted_list_requires_list() {
        let slots = OutputSlots::new(DeclaredOutputs::list(["a.b", "c.d"]).unwrap(), None, None);
        let error = slots
            .unwrap()
            .granted("test", ActionReturn::Value(json!([1, 2])))
            .unwrap_err();
        assert!(error.is::<ReturnNotList>());
    }

    #[test]
    fn granted_list_length_mismatch() {
        let slots = OutputSlots::new(DeclaredOutputs::list(["a.b", "c.d"]).unwrap(), None, None);
        let error = slots
            .unwrap()
            .granted("test", ActionReturn::List(vec![json!(1)]))
            .unwrap_err();
        let message = error.to_string();
        let error = error.downcast::<ReturnLengthMismatch>().unwrap();
        assert_eq!(error.returned, 1);
        assert_eq!(error.declared, 2);
        assert!(message.contains("elements 1"), "got: {message}");
        assert!(message.contains("outputs 2"), "got: {message}");
    }

    #[test]
    fn granted_scalar_requires_value() {
        let slots = OutputSlots::new(chart(), UNAUTHENTICATED, None).unwrap();
        let error = slots
            .granted("test", ActionReturn::List(vec![json!(1)]))
            .unwrap_err();
        assert!(error.is::<ReturnNotScalar>());
    }

    #[test]
    fn mapping_denial_key_collision() {
        let declared =
            DeclaredOutputs::mapping([("unauthenticated-modal.is_open", "chart.figure")]).unwrap();
        let error = OutputSlots::new(declared, UNAUTHENTICATED, None).unwrap_err();
        assert!(error.is::<DuplicateOutputKey>());
    }

    #[test]
    fn list_output_bound_to_denial_slot() {
        let declared = DeclaredOutputs::list(["missing-permission-modal.is_open"]).unwrap();
        let error = OutputSlots::new(declared, UNAUTHENTICATED, MISSING_PERMISSION).unwrap_err();
        let error = error.downcast::<DuplicateOutputRef>().unwrap();
        assert_eq!(error.reference, "missing-permission-modal.is_open");
    }

    #[test]
    fn list_outputs_bound_to_same_property() {
        let declared = DeclaredOutputs::list(["chart.figure", "chart.figure"]).unwrap();
        let error = OutputSlots::new(declared, None, None).unwrap_err();
        assert!(error.is::<DuplicateOutputRef>());
    }

    #[test]
    fn mapping_output_bound_to_denial_slot() {
        let declared =
            DeclaredOutputs::mapping([("flag", "unauthenticated-modal.is_open")]).unwrap();
        let error = OutputSlots::new(declared, UNAUTHENTICATED, None).unwrap_err();
        assert!(error.is::<DuplicateOutputRef>());

        let declared =
            DeclaredOutputs::mapping([("a", "chart.figure"), ("b", "chart.figure")]).unwrap();
        let error = OutputSlots::new(declared, None, None).unwrap_err();
        assert!(error.is::<DuplicateOutputRef>());
    }

    #[test]
    fn same_modal_for_both_denials() {
        let error = OutputSlots::new(chart(), UNAUTHENTICATED, UNAUTHENTICATED).unwrap_err();
        assert!(error.is::<DuplicateOutputRef>());
    }

    #[test]
    fn invalid_modal_id() {
        let error = OutputSlots::new(chart(), Some("bad.modal"), None).unwrap_err();
        assert!(error.is::<crate::errors::InvalidPropertyRef>());
    }

    #[test]
    fn pair_sequence() {
        let slots = OutputSlots::new(chart(), UNAUTHENTICATED, MISSING_PERMISSION).unwrap();
        let pairs = slots.pair(slots.denied(Verdict::Forbidden));
        let pairs: Vec<(String, OutputValue)> = pairs
            .into_iter()
            .map(|(slot, value)| (slot.to_string(), value))
            .collect();
        assert_eq!(
            pairs,
            vec![
                ("chart.figure".to_string(), OutputValue::Unchanged),
                ("unauthenticated-modal.is_open".to_string(), OutputValue::from(false)),
                ("missing-permission-modal.is_open".to_string(), OutputValue::from(true)),
            ],
        );
    }

    #[test]
    fn pair_mapping_and_scalar() {
        let slots = OutputSlots::new(mapping(), None, MISSING_PERMISSION).unwrap();
        let pairs = slots.pair(slots.denied(Verdict::Forbidden));
        let pairs: Vec<String> = pairs.into_iter().map(|(slot, _)| slot.to_string()).collect();
        assert_eq!(
            pairs,
            vec!["chart.figure", "text.children", "missing-permission-modal.is_open"],
        );

        let slots = OutputSlots::new(chart(), None, None).unwrap();
        let pairs = slots.pair(ActionOutputs::Scalar(OutputValue::from(json!(1))));
        assert_eq!(pairs.len(), 1);
        assert_eq!(pairs[0].0.to_string(), "chart.figure");
    }
}
