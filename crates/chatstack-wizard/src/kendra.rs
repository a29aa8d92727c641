// Repeatable sub-wizard for external Kendra index descriptors.
//
// One 6-question block per descriptor, repeated until the user declines
// to add another. Defaults for each iteration come from the tail of the
// previously loaded list (most recently loaded first); once that queue
// is exhausted, iterations start from empty defaults.

use crate::collect::Collector;
use anyhow::Result;
use chatstack_config::{catalog, validation, KendraExternal};

/// Collect zero-or-more external index descriptors. `remaining` is the
/// loaded prior list, consumed destructively from the end.
pub fn collect_external(
    collector: &mut dyn Collector,
    mut remaining: Vec<KendraExternal>,
) -> Result<Vec<KendraExternal>> {
    let regions: Vec<String> = catalog::SUPPORTED_REGIONS
        .iter()
        .map(|r| r.to_string())
        .collect();

    let mut collected = Vec::new();
    loop {
        let seed = remaining.pop().unwrap_or_default();

        let name = collector.text(
            "Kendra source name",
            &seed.name,
            Some(validation::validate_index_name),
        )?;
        let region_default = catalog::SUPPORTED_REGIONS
            .iter()
            .position(|r| *r == seed.region)
            .unwrap_or(0);
        let region = collector.select("Region of the Kendra index", &regions, region_default)?;
        let role_arn = collector.text(
            "Cross-account role ARN for the index, empty if same account",
            seed.role_arn.as_deref().unwrap_or(""),
            Some(validation::validate_role_arn),
        )?;
        let kendra_id = collector.text(
            "Kendra index ID",
            &seed.kendra_id,
            Some(validation::validate_kendra_id),
        )?;
        let enabled = collector.confirm("Enable this index", seed.enabled)?;

        collected.push(KendraExternal {
            name,
            region,
            // Empty input means same-account access; store as unset.
            role_arn: (!role_arn.is_empty()).then_some(role_arn),
            kendra_id,
            enabled,
        });

        if !collector.confirm("Add another Kendra index", false)? {
            break;
        }
    }
    Ok(collected)
}
