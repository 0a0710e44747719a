//! CLI smoke entry point.
//!
//! # Responsibility
//! - Exercise `taskpad_core` end to end without any UI runtime.
//! - Keep output deterministic enough for quick local sanity checks.

use taskpad_core::{
    core_version, format_timestamp, FilterStatus, MemoryStateStore, Priority, ServiceError,
    SortCriterion, TaskService, TaskStore,
};

fn main() {
    println!("taskpad_core version={}", core_version());

    let mut service = TaskService::new(TaskStore::load(MemoryStateStore::new()));
    if let Err(err) = seed(&mut service) {
        eprintln!("smoke seed failed: {err}");
        std::process::exit(1);
    }

    for task in service.visible_tasks(FilterStatus::All, SortCriterion::from_param("priority")) {
        let mark = if task.completed { 'x' } else { ' ' };
        println!(
            "[{mark}] {} (priority={}, added {})",
            task.title,
            task.priority.as_str(),
            format_timestamp(Some(task.created_at))
        );
    }
}

fn seed(service: &mut TaskService<MemoryStateStore>) -> Result<(), ServiceError> {
    service.add_task("water the plants", Priority::Low)?;
    let groceries = service.add_task("buy groceries", Priority::High)?;
    service.add_task("write trip report", Priority::Normal)?;
    service.toggle_task(groceries.id)?;
    Ok(())
}
