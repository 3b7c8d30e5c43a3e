use terrace_cascade::Cascade;

#[derive(Debug, Clone)]
struct Reading {
    year: i32,
    canton: &'static str,
    value: f64,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let records = vec![
        Reading { year: 1901, canton: "ZH", value: 10.0 },
        Reading { year: 1901, canton: "BE", value: 20.0 },
        Reading { year: 1902, canton: "ZH", value: 30.0 },
        Reading { year: 1902, canton: "ZH", value: 5.0 },
    ];

    let cascade = Cascade::new()
        .group_by_object(|m: &Reading| m.year)
        .group_by_object(|m: &Reading| m.canton)
        .value(|records: &[Reading]| records.iter().map(|m| m.value).sum::<f64>());

    let tree = cascade.apply(&records)?;

    for (year, cantons) in tree.as_object().unwrap() {
        println!("{}", year);
        for (canton, total) in cantons.as_object().unwrap() {
            println!("  {}: {}", canton, total.as_leaf().unwrap());
        }
    }

    Ok(())
}
