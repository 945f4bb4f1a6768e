use comfy_table::{ContentArrangement, Table};

use ir_core::ScenarioEngine;

pub fn run() -> Result<(), String> {
    let engine = ScenarioEngine::new();

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        "Scenario",
        "#",
        "Option",
        "Score",
        "Reputation",
        "Minutes",
        "Containment",
        "Systems",
    ]);

    let mut options = 0;
    for scenario in engine.scenarios() {
        for (i, option) in scenario.options.iter().enumerate() {
            let effect = &option.effect;
            let name = if i == 0 { scenario.label.as_str() } else { "" };
            table.add_row(vec![
                name.to_string(),
                (i + 1).to_string(),
                option.label.clone(),
                format!("{:+}", effect.score_delta),
                format!("{:+}", effect.reputation_delta),
                format!("+{}", effect.time_delta),
                overwrite(effect.containment_set, "%"),
                overwrite(effect.systems_affected_set, ""),
            ]);
            options += 1;
        }
    }

    println!("{table}");
    println!();
    println!(
        "  {} scenarios, {options} options",
        engine.scenario_count()
    );

    Ok(())
}

fn overwrite(value: Option<u32>, unit: &str) -> String {
    match value {
        Some(v) => format!("={v}{unit}"),
        None => "-".to_string(),
    }
}
