use uuid::Uuid;

pub mod item;

pub mod job;

pub mod step;

/// Builds a short name out of an id, for jobs that were not given one.
fn build_name(id: &Uuid) -> String {
    let simple = id.simple().to_string();
    format!("load-{}", &simple[..8])
}
