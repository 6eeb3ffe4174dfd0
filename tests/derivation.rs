//! End-to-end derivation pipeline tests for `posterid`.

use anyhow::ensure;
use posterid::{color_for, IdGenerator, Salt};
use time::macros::date;

fn daily_generator(day: time::Date) -> anyhow::Result<IdGenerator<time::Date>> {
    Ok(IdGenerator::with_clock(Salt::new("unit-test-salt")?, day))
}

#[test]
fn daily_id_is_stable_within_a_day() -> anyhow::Result<()> {
    let ids = daily_generator(date!(2025 - 01 - 01))?;
    let first = ids.generate_daily("192.168.1.1");
    ensure!(first.as_str() == "58031ff0");
    ensure!(first == ids.generate_daily("192.168.1.1"));
    ensure!(first != ids.generate_daily("192.168.1.2"));
    Ok(())
}

#[test]
fn daily_id_changes_when_the_date_advances() -> anyhow::Result<()> {
    let yesterday = daily_generator(date!(2025 - 01 - 01))?;
    let today = daily_generator(date!(2025 - 01 - 02))?;
    ensure!(yesterday.generate_daily("192.168.1.1") != today.generate_daily("192.168.1.1"));
    Ok(())
}

#[test]
fn daily_context_matches_the_explicit_date_string() -> anyhow::Result<()> {
    let ids = daily_generator(date!(2025 - 01 - 01))?;
    ensure!(ids.generate_daily("10.0.0.1") == ids.generate("10.0.0.1", "2025-01-01"));
    Ok(())
}

#[test]
fn changing_the_salt_changes_the_id() -> anyhow::Result<()> {
    let first = IdGenerator::new(Salt::new("first-salt")?);
    let second = IdGenerator::new(Salt::new("second-salt")?);
    ensure!(first.generate("192.168.1.1", "") != second.generate("192.168.1.1", ""));
    Ok(())
}

#[test]
fn pipeline_is_stable_across_repeated_runs() -> anyhow::Result<()> {
    let ids = daily_generator(date!(2025 - 01 - 01))?;
    let reference_id = ids.generate_daily("192.168.1.1");
    let reference_color = color_for(reference_id.as_str())?;

    let rendered = reference_color.to_string();
    ensure!(rendered.len() == 7);
    ensure!(rendered.starts_with('#'));
    ensure!(rendered
        .chars()
        .skip(1)
        .all(|c| matches!(c, '0'..='9' | 'A'..='F')));

    for _ in 0..5 {
        let id = ids.generate_daily("192.168.1.1");
        ensure!(id == reference_id);
        ensure!(color_for(id.as_str())? == reference_color);
    }
    Ok(())
}

#[test]
fn tokens_serialize_as_bare_strings() -> anyhow::Result<()> {
    let ids = daily_generator(date!(2025 - 01 - 01))?;
    let id = ids.generate_daily("192.168.1.1");
    let color = color_for(id.as_str())?;

    ensure!(serde_json::to_value(&id)? == serde_json::json!("58031ff0"));
    ensure!(serde_json::to_value(color)? == serde_json::json!("#267DD9"));
    Ok(())
}
