use chrono::NaiveDate;
use serde_json::{json, Value};
use terrace_cascade::{Cascade, CascadeValue, TerraceCascadeError};
use terrace_common::key::GroupKey;

#[derive(Debug, Clone, PartialEq)]
struct Observation {
    year: i32,
    category: &'static str,
    value: f64,
}

fn tidy_records() -> Vec<Observation> {
    vec![
        Observation {
            year: 1901,
            category: "A",
            value: 10.0,
        },
        Observation {
            year: 1901,
            category: "B",
            value: 20.0,
        },
        Observation {
            year: 1902,
            category: "A",
            value: 30.0,
        },
    ]
}

#[test]
fn test_year_by_category_sums() -> Result<(), TerraceCascadeError> {
    let cascade = Cascade::new()
        .group_by_object(|o: &Observation| o.year)
        .group_by_object(|o: &Observation| o.category)
        .value(|records: &[Observation]| records.iter().map(|o| o.value).sum::<f64>());

    let tree = cascade.apply(&tidy_records())?;

    let years = tree.as_object().unwrap();
    let year_keys: Vec<&str> = years.keys().map(String::as_str).collect();
    assert_eq!(year_keys, vec!["1901", "1902"]);

    let y1901 = years["1901"].as_object().unwrap();
    assert_eq!(y1901["A"].as_leaf(), Some(&10.0));
    assert_eq!(y1901["B"].as_leaf(), Some(&20.0));

    let y1902 = years["1902"].as_object().unwrap();
    assert_eq!(y1902["A"].as_leaf(), Some(&30.0));
    assert!(y1902.get("B").is_none());
    Ok(())
}

// Chart data arrives as parsed JSON rows; the cascade only ever sees the
// records through its accessors.
#[test]
fn test_opaque_json_records() -> Result<(), TerraceCascadeError> {
    let records: Vec<Value> = vec![
        json!({"region": "east", "sales": 4}),
        json!({"region": "west", "sales": 6}),
        json!({"region": "east", "sales": 1}),
    ];

    let cascade = Cascade::new()
        .try_group_by_object(|record: &Value| {
            record["region"]
                .as_str()
                .map(GroupKey::from)
                .ok_or_else(|| TerraceCascadeError::accessor("region is not a string"))
        })
        .value(|records: &[Value]| {
            records
                .iter()
                .filter_map(|r| r["sales"].as_f64())
                .sum::<f64>()
        });

    let tree = cascade.apply(&records)?;
    let regions = tree.as_object().unwrap();
    assert_eq!(regions["east"].as_leaf(), Some(&5.0));
    assert_eq!(regions["west"].as_leaf(), Some(&6.0));

    // a record with a malformed key aborts the whole application
    let mut bad = records.clone();
    bad.push(json!({"region": 7, "sales": 2}));
    assert!(matches!(
        cascade.apply(&bad),
        Err(TerraceCascadeError::Accessor(_))
    ));
    Ok(())
}

#[test]
fn test_date_keys_group_by_canonical_form() -> Result<(), TerraceCascadeError> {
    #[derive(Clone)]
    struct Reading {
        day: NaiveDate,
        level: f64,
    }

    let day1 = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
    let day2 = NaiveDate::from_ymd_opt(2024, 3, 2).unwrap();
    let readings = vec![
        Reading { day: day1, level: 1.0 },
        Reading { day: day2, level: 2.0 },
        Reading { day: day1, level: 3.0 },
    ];

    let cascade = Cascade::new()
        .group_by_object(|r: &Reading| r.day)
        .value(|records: &[Reading]| records.len());

    let tree = cascade.apply(&readings)?;
    let days = tree.as_object().unwrap();
    assert_eq!(days["2024-03-01"].as_leaf(), Some(&2));
    assert_eq!(days["2024-03-02"].as_leaf(), Some(&1));
    Ok(())
}

#[test]
fn test_three_level_mixed_pipeline_depth() -> Result<(), TerraceCascadeError> {
    let cascade = Cascade::new()
        .group_by_array(|o: &Observation| o.year)
        .group_by_object(|o: &Observation| o.category)
        .group_by_array(|o: &Observation| o.value);

    let tree = cascade.apply(&tidy_records())?;
    assert_eq!(tree.depth(), 3);

    // level kinds follow step kinds
    let years = tree.as_array().unwrap();
    let categories = years[0].as_object().unwrap();
    let values = categories["A"].as_array().unwrap();
    assert!(matches!(values[0], CascadeValue::Leaf(_)));
    Ok(())
}
