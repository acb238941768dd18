//! Forms built from configuration.
//!
//! A [`ConfiguredForm`] creates one control and one bound widget per field
//! in [`Settings::fields`]. Validator chains come entirely from
//! configuration, so two deployments of the same form can validate
//! differently without code changes.
//!
//! Field events are routed by name and run inside a per-field tracing span.

use std::collections::BTreeMap;

use formbind_core::logging::field_span;
use formbind_core::{FormbindError, FormbindResult, Settings};

use crate::control::{FormControl, SharedControl};
use crate::directive::bind_control;
use crate::errors::ValidationErrors;
use crate::messages::MessageTemplates;
use crate::validators;
use crate::value::Value;
use crate::widget::{BoundInput, WidgetConfig};

/// A control together with the widget bound to it.
#[derive(Debug)]
pub struct FormField {
    control: SharedControl,
    widget: BoundInput,
}

impl FormField {
    /// Returns the field's control.
    pub const fn control(&self) -> &SharedControl {
        &self.control
    }

    /// Returns the field's widget.
    pub const fn widget(&self) -> &BoundInput {
        &self.widget
    }
}

/// A set of named fields built from [`Settings`].
#[derive(Debug)]
pub struct ConfiguredForm {
    fields: BTreeMap<String, FormField>,
}

impl ConfiguredForm {
    /// Builds every configured field and binds its widget.
    ///
    /// # Errors
    ///
    /// Returns an error if a field's validator chain is inconsistent or its
    /// initial value is not a scalar.
    pub fn from_settings(settings: &Settings) -> FormbindResult<Self> {
        settings.check()?;
        let messages = MessageTemplates::from_settings(&settings.messages);

        let mut fields = BTreeMap::new();
        for (name, field_settings) in &settings.fields {
            let _span = field_span(name).entered();

            let initial = Value::try_from(field_settings.initial.clone()).map_err(|e| {
                FormbindError::ConfigurationError(format!("field '{name}': {e}"))
            })?;
            let control = FormControl::new(
                initial,
                validators::boxed(field_settings.validators.iter().cloned()),
            )
            .into_shared();

            let mut widget = BoundInput::new(WidgetConfig::from_field(settings, field_settings))
                .with_messages(messages.clone());
            bind_control(&mut widget, &control);

            fields.insert(name.clone(), FormField { control, widget });
        }

        tracing::debug!(fields = fields.len(), "form initialized");
        Ok(Self { fields })
    }

    /// Iterates over field names in order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// Returns a field by name.
    pub fn field(&self, name: &str) -> FormbindResult<&FormField> {
        self.fields
            .get(name)
            .ok_or_else(|| FormbindError::UnknownField(name.to_string()))
    }

    /// Returns a field's control by name.
    pub fn control(&self, name: &str) -> FormbindResult<&SharedControl> {
        self.field(name).map(FormField::control)
    }

    fn field_mut(&mut self, name: &str) -> FormbindResult<&mut FormField> {
        self.fields
            .get_mut(name)
            .ok_or_else(|| FormbindError::UnknownField(name.to_string()))
    }

    /// Delivers an edit event to a field's widget.
    pub fn edit(&mut self, name: &str, value: impl Into<Value>) -> FormbindResult<()> {
        let _span = field_span(name).entered();
        self.field_mut(name)?.widget.on_edit(value);
        Ok(())
    }

    /// Delivers a focus-lost event to a field's widget.
    pub fn blur(&mut self, name: &str, value: impl Into<Value>) -> FormbindResult<()> {
        let _span = field_span(name).entered();
        self.field_mut(name)?.widget.on_focus_lost(value);
        Ok(())
    }

    /// Marks every control touched, as a submit attempt would.
    pub fn mark_all_touched(&self) {
        for field in self.fields.values() {
            field.control.borrow_mut().mark_touched();
        }
    }

    /// Returns `true` when no control is invalid.
    pub fn is_valid(&self) -> bool {
        self.fields
            .values()
            .all(|f| !f.control.borrow().invalid())
    }

    /// Returns the current value of every field.
    pub fn values(&self) -> BTreeMap<String, Value> {
        self.fields
            .iter()
            .map(|(name, f)| (name.clone(), f.control.borrow().value().clone()))
            .collect()
    }

    /// Returns the failures of every invalid field.
    pub fn errors(&self) -> BTreeMap<String, ValidationErrors> {
        self.fields
            .iter()
            .filter_map(|(name, f)| {
                f.control
                    .borrow()
                    .errors()
                    .cloned()
                    .map(|errors| (name.clone(), errors))
            })
            .collect()
    }

    /// Returns the message each field currently displays.
    ///
    /// Only fields whose widget shows its error (touched and invalid) appear.
    pub fn error_messages(&self) -> BTreeMap<String, String> {
        self.fields
            .iter()
            .filter(|(_, f)| f.widget.compute_styles().show_error)
            .map(|(name, f)| (name.clone(), f.widget.error_message()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use formbind_core::settings::{FieldSettings, InputType, ValidatorRule};

    use crate::errors::ErrorKind;

    fn settings_with(fields: Vec<(&str, FieldSettings)>) -> Settings {
        let mut settings = Settings::default();
        for (name, field) in fields {
            settings.fields.insert(name.to_string(), field);
        }
        settings
    }

    fn name_field() -> FieldSettings {
        FieldSettings {
            label: "Name".into(),
            validators: vec![
                ValidatorRule::MinLength { length: 2 },
                ValidatorRule::MaxLength { length: 20 },
            ],
            ..FieldSettings::default()
        }
    }

    fn age_field() -> FieldSettings {
        FieldSettings {
            input_type: InputType::Number,
            label: "Age".into(),
            placeholder: Some("Years".into()),
            initial: serde_json::json!(null),
            validators: vec![
                ValidatorRule::Required,
                ValidatorRule::Min { value: 0.0 },
                ValidatorRule::Max { value: 150.0 },
            ],
        }
    }

    #[test]
    fn test_from_settings_builds_fields() {
        let form =
            ConfiguredForm::from_settings(&settings_with(vec![("name", name_field()), ("age", age_field())]))
                .unwrap();
        assert_eq!(form.field_names().collect::<Vec<_>>(), vec!["age", "name"]);

        let age = form.field("age").unwrap();
        assert_eq!(age.widget().config().input_type, InputType::Number);
        assert_eq!(age.widget().config().placeholder, "Years");
        assert_eq!(
            form.field("name").unwrap().widget().config().placeholder,
            "Enter value..."
        );
    }

    #[test]
    fn test_initial_state() {
        let form =
            ConfiguredForm::from_settings(&settings_with(vec![("name", name_field()), ("age", age_field())]))
                .unwrap();
        // Empty name passes min_length; missing age fails required.
        assert!(!form.is_valid());
        let errors = form.errors();
        assert!(!errors.contains_key("name"));
        assert!(errors["age"].contains(ErrorKind::Required));
        // Nothing is touched yet, so nothing is displayed.
        assert!(form.error_messages().is_empty());
    }

    #[test]
    fn test_edit_and_blur_route_by_name() {
        let mut form =
            ConfiguredForm::from_settings(&settings_with(vec![("name", name_field())])).unwrap();
        form.edit("name", "A").unwrap();
        form.blur("name", "A").unwrap();

        let control = form.control("name").unwrap();
        assert!(control.borrow().touched());
        assert!(control.borrow().dirty());
        assert_eq!(
            form.error_messages().get("name").map(String::as_str),
            Some("Should be min 2 symbols")
        );

        form.edit("name", "Ada").unwrap();
        assert!(form.is_valid());
        assert!(form.error_messages().is_empty());
        assert_eq!(form.values()["name"], Value::from("Ada"));
    }

    #[test]
    fn test_unknown_field() {
        let mut form = ConfiguredForm::from_settings(&Settings::default()).unwrap();
        assert!(matches!(
            form.edit("missing", "x"),
            Err(FormbindError::UnknownField(_))
        ));
        assert!(form.field("missing").is_err());
        assert!(form.blur("missing", "x").is_err());
    }

    #[test]
    fn test_mark_all_touched_reveals_messages() {
        let form = ConfiguredForm::from_settings(&settings_with(vec![("age", age_field())])).unwrap();
        form.mark_all_touched();
        assert_eq!(
            form.error_messages().get("age").map(String::as_str),
            Some("Field is required")
        );
    }

    #[test]
    fn test_message_overrides_from_settings() {
        let mut settings = settings_with(vec![("age", age_field())]);
        settings
            .messages
            .insert("required".into(), "Age is mandatory".into());
        let form = ConfiguredForm::from_settings(&settings).unwrap();
        form.mark_all_touched();
        assert_eq!(form.error_messages()["age"], "Age is mandatory");
    }

    #[test]
    fn test_rejects_non_scalar_initial() {
        let field = FieldSettings {
            initial: serde_json::json!([1, 2]),
            ..FieldSettings::default()
        };
        let err = ConfiguredForm::from_settings(&settings_with(vec![("tags", field)])).unwrap_err();
        assert!(err.to_string().contains("field 'tags'"));
    }

    #[test]
    fn test_rejects_inconsistent_chain() {
        let field = FieldSettings {
            validators: vec![
                ValidatorRule::Min { value: 10.0 },
                ValidatorRule::Max { value: 1.0 },
            ],
            ..FieldSettings::default()
        };
        let err = ConfiguredForm::from_settings(&settings_with(vec![("n", field)])).unwrap_err();
        assert!(matches!(err, FormbindError::ImproperlyConfigured(_)));
    }
}
