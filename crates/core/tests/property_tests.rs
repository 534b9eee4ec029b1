//! Property-based tests for value parsing and loading.
//!
//! Test coverage:
//! - Number literals: decimal and scientific renderings of any finite `f64`
//!   load back to the same value.
//! - Integers inside the exactly-representable range load as JSON integers.
//! - Strings: surrounding whitespace never reaches the result.
//! - Defaults: absent leaves always yield an equal copy of the default, and
//!   repeated loads agree.

use proptest::prelude::*;
use serde_json::{Value, json};

use envschema::{EnvLoader, LeafSchema, Schema};

fn load_one(leaf: LeafSchema, raw: Option<&str>) -> Result<Value, envschema::EnvError> {
    let schema = Schema::new().leaf("value", leaf);
    let env: Vec<(&str, &str)> = raw.map(|r| ("VALUE", r)).into_iter().collect();
    let config = EnvLoader::new(schema).load(&env)?;
    Ok(config.get(&["value"]).cloned().unwrap_or(Value::Null))
}

/// Strategy for strings that survive trimming unchanged and carry no quotes.
fn plain_string_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9_./:-]([a-zA-Z0-9_./: -]{0,30}[a-zA-Z0-9_./:-])?".prop_map(String::from)
}

proptest! {
    #[test]
    fn prop_finite_number_round_trips(number in any::<f64>().prop_filter("finite", |n| n.is_finite())) {
        for literal in [format!("{}", number), format!("{:e}", number)] {
            let value = load_one(LeafSchema::number(), Some(&literal)).unwrap();
            prop_assert_eq!(value.as_f64(), Some(number));
        }
    }

    #[test]
    fn prop_safe_integers_load_as_integers(number in -9_007_199_254_740_991i64..=9_007_199_254_740_991i64) {
        let value = load_one(LeafSchema::number(), Some(&number.to_string())).unwrap();
        prop_assert_eq!(value, json!(number));
    }

    #[test]
    fn prop_string_whitespace_is_trimmed(
        text in plain_string_strategy(),
        before in "[ \t]{0,3}",
        after in "[ \t]{0,3}",
    ) {
        let raw = format!("{}{}{}", before, text, after);
        let value = load_one(LeafSchema::string(), Some(&raw)).unwrap();
        prop_assert_eq!(value, json!(text));
    }

    #[test]
    fn prop_default_is_copied_not_shared(items in prop::collection::vec(plain_string_strategy(), 0..5)) {
        let default = json!(items);
        let schema = Schema::new().leaf(
            "hosts",
            LeafSchema::array(LeafSchema::string()).with_default(default.clone()),
        );
        let loader = EnvLoader::new(schema);
        let empty: [(&str, &str); 0] = [];

        let mut first = loader.load(&empty).unwrap().into_value();
        if let Some(hosts) = first["hosts"].as_array_mut() {
            hosts.push(json!("mutated"));
        }
        let second = loader.load(&empty).unwrap();
        let third = loader.load(&empty).unwrap();

        prop_assert_eq!(second.get(&["hosts"]), Some(&default));
        prop_assert_eq!(second, third);
    }
}
