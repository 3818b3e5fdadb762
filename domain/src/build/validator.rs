//! Build validation against a catalog snapshot.
//!
//! Validation is a pure function of the request and a point-in-time
//! [`CatalogSnapshot`]: the same inputs always produce the same decision
//! and the same first-failure message.

use super::request::{BuildRequest, StockRequest};
use crate::catalog::entities::Resource;
use crate::catalog::value_objects::ResourceId;
use thiserror::Error;

/// A point-in-time read of the catalog used for one validation pass.
///
/// Both pools keep insertion order, so a duplicated name resolves to the
/// first-created record.
#[derive(Debug, Clone, Default)]
pub struct CatalogSnapshot {
    pub tools: Vec<Resource>,
    pub materials: Vec<Resource>,
}

impl CatalogSnapshot {
    pub fn new(tools: Vec<Resource>, materials: Vec<Resource>) -> Self {
        Self { tools, materials }
    }

    fn find<'a>(pool: &'a [Resource], name: &str) -> Option<&'a Resource> {
        pool.iter().find(|r| r.name().eq_ignore_ascii_case(name))
    }
}

/// A request line resolved against the snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedItem {
    pub id: ResourceId,
    /// Canonical record name (the snapshot's casing, not the request's)
    pub name: String,
    pub quantity: u32,
}

/// The first shortfall that rejected a build.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Not enough {name} to build something.")]
pub struct Deficiency {
    /// The name as the caller requested it
    pub name: String,
    pub requested: u32,
    pub available: u32,
}

/// Outcome of an accepted validation pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AcceptedBuild {
    pub tools: Vec<ResolvedItem>,
    pub materials: Vec<ResolvedItem>,
    /// Requested names with no case-insensitive match in the snapshot.
    /// Reported to the caller but excluded from sufficiency checks.
    pub missing: Vec<String>,
}

/// Validate a build request against a snapshot.
///
/// Tools are checked before materials, each in request order, and the
/// first insufficient line rejects the whole build - deficiencies are not
/// aggregated. Names that resolve to nothing are collected into
/// [`AcceptedBuild::missing`] and skipped.
pub fn validate(
    request: &BuildRequest,
    snapshot: &CatalogSnapshot,
) -> Result<AcceptedBuild, Deficiency> {
    let mut accepted = AcceptedBuild::default();
    resolve_lines(
        &request.tools,
        &snapshot.tools,
        &mut accepted.tools,
        &mut accepted.missing,
    )?;
    resolve_lines(
        &request.materials,
        &snapshot.materials,
        &mut accepted.materials,
        &mut accepted.missing,
    )?;
    Ok(accepted)
}

fn resolve_lines(
    requests: &[StockRequest],
    pool: &[Resource],
    resolved: &mut Vec<ResolvedItem>,
    missing: &mut Vec<String>,
) -> Result<(), Deficiency> {
    for line in requests {
        let Some(found) = CatalogSnapshot::find(pool, &line.name) else {
            missing.push(line.name.clone());
            continue;
        };
        if found.amount() < line.quantity {
            return Err(Deficiency {
                name: line.name.clone(),
                requested: line.quantity,
                available: found.amount(),
            });
        }
        resolved.push(ResolvedItem {
            id: found.id().clone(),
            name: found.name().to_string(),
            quantity: line.quantity,
        });
    }
    Ok(())
}
