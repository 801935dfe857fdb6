//! Integration test: validate realistic request bodies end to end.
//!
//! Each validator composes several checkers the way an API handler would,
//! then asserts on the stable code and family of the first failure.

use std::num::NonZeroUsize;

use jsonguard_checks::{
    KeyArrayChecker, KeyBooleanChecker, KeyEnumChecker, KeyFloatChecker, KeyIntegerChecker,
    KeyJsonObjectChecker, KeyStringChecker, PresenceChecker, Requirement, ValidateJsonPayload,
    ValueArrayChecker, ValueIntegerChecker, ValueStringChecker,
};
use jsonguard_core::{
    ArrayLengthRange, FailureFamily, FailureKind, FloatRange, GuardConfig, GuardError,
    IntValueRange, Payload, StringByteLengthRange, ValidationFailure, Value,
};
use serde_json::json;

fn payload(value: serde_json::Value) -> Payload {
    Value::from(value).into_array().expect("object payload")
}

// ---------------------------------------------------------------------------
// Scenarios
// ---------------------------------------------------------------------------

#[test]
fn test_missing_required_key() {
    let failure = PresenceChecker::new()
        .required("myKey", &payload(json!({})))
        .unwrap_err();
    assert_eq!(failure.kind(), FailureKind::EntryMissing);
    assert_eq!(failure.code(), "propertyRequired");
}

#[test]
fn test_blank_required_string() {
    let failure = KeyStringChecker::default()
        .required("myKey", &payload(json!({"myKey": "   "})))
        .unwrap_err();
    assert_eq!(failure.kind(), FailureKind::EntryEmpty);
    assert_eq!(failure.code(), "requiredValueForProperty");
}

#[test]
fn test_integer_not_equal() {
    let failure = KeyIntegerChecker::default()
        .equals_to("myKey", &payload(json!({"myKey": 5})), 6, Requirement::Required)
        .unwrap_err();
    assert_eq!(failure.code(), "unexpectedValue");
    assert!(failure.message().contains("'6'"));
    assert!(failure.message().contains("'5'"));
}

#[test]
fn test_exact_length_array_of_objects() {
    let elements = Value::from(json!([{}, {}, {}])).into_array().unwrap();
    let three = NonZeroUsize::new(3).unwrap();
    assert!(ValueArrayChecker::new()
        .array_of_exact_length(&elements, three)
        .is_ok());
}

#[test]
fn test_key_array_below_min_length() {
    let range = ArrayLengthRange::new(Some(3), None).unwrap();
    let failure = KeyArrayChecker::default()
        .key_array_of_length_range(
            "myKey",
            &payload(json!({"myKey": [1, "blah"]})),
            &range,
            Requirement::Required,
        )
        .unwrap_err();
    assert_eq!(failure.kind(), FailureKind::ValueTooSmall);
    assert_eq!(failure.code(), "expectedMinValue");
}

#[test]
fn test_float_below_min_despite_tolerance() {
    let checker = KeyFloatChecker::default();
    let range = FloatRange::new(checker.floats(), Some(3.65), None).unwrap();
    let failure = checker
        .within_range(
            "myKey",
            &payload(json!({"myKey": 3.64901})),
            &range,
            Requirement::Required,
        )
        .unwrap_err();
    assert_eq!(failure.kind(), FailureKind::ValueTooSmall);
}

// ---------------------------------------------------------------------------
// A composed request validator
// ---------------------------------------------------------------------------

struct CreateOrder {
    strings: KeyStringChecker,
    integers: KeyIntegerChecker,
    floats: KeyFloatChecker,
    booleans: KeyBooleanChecker,
    enums: KeyEnumChecker,
    arrays: KeyArrayChecker,
    objects: KeyJsonObjectChecker,
    value_strings: ValueStringChecker,
    value_integers: ValueIntegerChecker,
    value_arrays: ValueArrayChecker,
    reference_length: StringByteLengthRange,
    quantity: IntValueRange,
    price: FloatRange,
    line_count: ArrayLengthRange,
    currencies: Vec<Value>,
}

impl CreateOrder {
    fn new(config: &GuardConfig) -> Result<Self, GuardError> {
        let floats = KeyFloatChecker::with_config(config);
        let price = FloatRange::new(floats.floats(), Some(0.01), Some(10_000.0))?;
        Ok(Self {
            strings: KeyStringChecker::default(),
            integers: KeyIntegerChecker::default(),
            floats,
            booleans: KeyBooleanChecker::default(),
            enums: KeyEnumChecker::default(),
            arrays: KeyArrayChecker::default(),
            objects: KeyJsonObjectChecker::default(),
            value_strings: ValueStringChecker::new(),
            value_integers: ValueIntegerChecker::new(),
            value_arrays: ValueArrayChecker::new(),
            reference_length: StringByteLengthRange::new(Some(4), Some(32))?,
            quantity: IntValueRange::new(Some(1), Some(99))?,
            price,
            line_count: ArrayLengthRange::new(Some(1), Some(10))?,
            currencies: vec![Value::from("EUR"), Value::from("USD")],
        })
    }

    fn validate_line(&self, line: &Payload) -> Result<(), ValidationFailure> {
        self.strings.required("sku", line)?;
        self.integers
            .within_range("quantity", line, &self.quantity, Requirement::Required)?;
        self.floats
            .within_range("price", line, &self.price, Requirement::Required)?;
        Ok(())
    }
}

impl ValidateJsonPayload for CreateOrder {
    fn validate(&self, payload: &Payload) -> Result<(), ValidationFailure> {
        self.strings
            .byte_length_range("reference", payload, &self.reference_length, Requirement::Required)?
            .email_format("contact", payload, Requirement::Required)?
            .url_format("callback", payload, Requirement::Optional)?
            .date_time_format("deliver_on", payload, "%Y-%m-%d", Requirement::Optional)?;
        self.enums
            .is_enum("currency", payload, &self.currencies, Requirement::Required)?;
        self.booleans.optional("gift", payload)?;
        self.objects.optional("metadata", payload)?;
        self.arrays
            .key_array_of_json_objects("lines", payload, Requirement::Required)?
            .key_array_of_length_range("lines", payload, &self.line_count, Requirement::Required)?;

        if let Some(lines) = payload.get("lines").and_then(Value::as_array) {
            for line in lines.values().filter_map(Value::as_array) {
                self.validate_line(line)?;
            }
        }

        if let Some(tags) = payload.get("tags").and_then(Value::as_array) {
            self.value_arrays.array_of_string(tags, Requirement::Optional)?;
            for tag in tags.values().filter_map(Value::as_str) {
                self.value_strings.required(Some(tag))?;
            }
        }

        if let Some(birthday) = payload.get("birthday").and_then(Value::as_array) {
            let part = |name: &str| match birthday.get(name) {
                Some(Value::Int(i)) => *i,
                _ => 0,
            };
            self.value_integers
                .integer_group_represents_a_date(part("year"), part("month"), part("day"))?;
        }
        Ok(())
    }
}

fn valid_order() -> serde_json::Value {
    json!({
        "reference": "ORD-2024-0001",
        "contact": "buyer@example.com",
        "callback": "https://shop.example.com/hooks/order",
        "deliver_on": "2024-06-30",
        "currency": "EUR",
        "gift": false,
        "metadata": {"channel": "web"},
        "lines": [
            {"sku": "A-1", "quantity": 2, "price": 19.99},
            {"sku": "B-7", "quantity": 1, "price": 5}
        ],
        "tags": ["new", "promo"],
        "birthday": {"year": 1990, "month": 7, "day": 14}
    })
}

fn order_with(field: &str, value: serde_json::Value) -> serde_json::Value {
    let mut order = valid_order();
    order[field] = value;
    order
}

fn validator() -> CreateOrder {
    CreateOrder::new(&GuardConfig::default()).expect("well-formed ranges")
}

#[test]
fn test_valid_order_passes() {
    assert!(validator().validate_json(&valid_order()).is_ok());
}

#[test]
fn test_optional_fields_may_be_omitted() {
    let mut order = valid_order();
    let object = order.as_object_mut().unwrap();
    for optional in ["callback", "deliver_on", "gift", "metadata", "tags", "birthday"] {
        object.remove(optional);
    }
    assert!(validator().validate_json(&order).is_ok());
}

#[test]
fn test_order_failures_report_first_violation() {
    let cases = [
        ("reference", json!("ab"), "expectedMinValue"),
        ("contact", json!("buyer at example"), "keyNotEmail"),
        ("callback", json!("shop/hooks"), "requiredUrlFormat"),
        ("deliver_on", json!("2024-06-31"), "invalidDateFormat"),
        ("currency", json!("GBP"), "unexpectedEnumValue"),
        ("gift", json!("yes"), "entryOptionalNotBoolean"),
        ("metadata", json!([1, 2]), "invalidJsonObject"),
        ("lines", json!([{"sku": "A-1"}, "oops"]), "valueNotAJsonObject"),
        ("lines", json!({"first": {"sku": "A-1"}}), "expectedArrayValue"),
        ("tags", json!(["a", 2]), "expectedStringValue"),
        ("tags", json!(["a", " "]), "emptyString"),
        ("birthday", json!({"year": 1990, "month": 2, "day": 30}), "integerComponentsNotADate"),
    ];
    for (field, value, code) in cases {
        let failure = validator()
            .validate_json(&order_with(field, value.clone()))
            .unwrap_err();
        assert_eq!(failure.code(), code, "{field} = {value}");
    }
}

#[test]
fn test_line_item_failures() {
    let cases = [
        (json!({"sku": "A-1", "quantity": 0, "price": 1.0}), "expectedMinValue"),
        (json!({"sku": "A-1", "quantity": 2.0, "price": 1.0}), "requiredIntegerValue"),
        (json!({"sku": "A-1", "quantity": 2, "price": 10000.5}), "expectedMaxValue"),
        (json!({"sku": "A-1", "quantity": 2, "price": "1.0"}), "expectedFloatValue"),
        (json!({"quantity": 2, "price": 1.0}), "propertyRequired"),
    ];
    for (line, code) in cases {
        let failure = validator()
            .validate_json(&order_with("lines", json!([line.clone()])))
            .unwrap_err();
        assert_eq!(failure.code(), code, "{line}");
    }
}

#[test]
fn test_list_structure_failures_are_structure_family() {
    let failure = validator()
        .validate_json(&order_with("lines", json!({"1": {"sku": "A"}})))
        .unwrap_err();
    assert_eq!(failure.kind(), FailureKind::FirstIndexNotZero);
    assert_eq!(failure.family(), FailureFamily::UnrecognizedStructure);

    let failure = validator()
        .validate_json(&order_with("lines", json!("A-1")))
        .unwrap_err();
    assert_eq!(failure.kind(), FailureKind::ValueNotAnArray);
    assert_eq!(failure.family(), FailureFamily::MalformedRequestBody);
}

#[test]
fn test_failure_report_serializes_code_and_message() {
    let failure = validator()
        .validate_json(&order_with("currency", json!("GBP")))
        .unwrap_err();
    let report = serde_json::to_value(failure.serialize()).unwrap();
    assert_eq!(
        report,
        json!({
            "code": "unexpectedEnumValue",
            "message": "The key 'currency' can only be one of the following: [EUR | USD], but it is 'GBP'"
        })
    );
}

#[test]
fn test_guard_error_wraps_range_and_validation_failures() {
    fn check(body: &serde_json::Value) -> Result<(), GuardError> {
        let range = IntValueRange::new(Some(10), Some(1))?;
        KeyIntegerChecker::default().within_range(
            "n",
            &payload(body.clone()),
            &range,
            Requirement::Required,
        )?;
        Ok(())
    }
    assert!(matches!(check(&json!({"n": 5})), Err(GuardError::Range(_))));

    fn validate(body: &serde_json::Value) -> Result<(), GuardError> {
        validator().validate_json(body)?;
        Ok(())
    }
    assert!(matches!(
        validate(&json!({})),
        Err(GuardError::Validation(f)) if f.code() == "propertyRequired"
    ));
}

#[test]
fn test_config_from_yaml_drives_float_tolerance() {
    let config = GuardConfig::from_yaml_str("float_tolerance:\n  epsilon: 0.001\n").unwrap();
    let loose = CreateOrder::new(&config).unwrap();
    let line = json!([{"sku": "A-1", "quantity": 1, "price": 10000.001}]);
    assert!(loose.validate_json(&order_with("lines", line.clone())).is_ok());
    assert!(validator().validate_json(&order_with("lines", line)).is_err());

    let err = GuardConfig::from_yaml_str("float_tolerance:\n  epsilon: -1\n").unwrap_err();
    let err: GuardError = err.into();
    assert!(matches!(err, GuardError::Config(_)));
}

#[test]
fn test_checkers_are_shareable_across_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<CreateOrder>();
    assert_send_sync::<KeyFloatChecker>();

    let validator = std::sync::Arc::new(validator());
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let validator = std::sync::Arc::clone(&validator);
            std::thread::spawn(move || validator.validate_json(&valid_order()).is_ok())
        })
        .collect();
    for handle in handles {
        assert!(handle.join().unwrap());
    }
}
