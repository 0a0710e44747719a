use taskpad_core::{project, FilterStatus, Priority, SortCriterion, Task};
use uuid::Uuid;

fn task_at(title: &str, priority: Priority, created_at: i64) -> Task {
    Task::with_id(Uuid::new_v4(), title, priority, created_at)
}

#[test]
fn filter_by_completion_state() {
    let mut done = task_at("done", Priority::Normal, 1);
    done.completed = true;
    let open = task_at("open", Priority::Normal, 2);
    let tasks = vec![done.clone(), open.clone()];

    let completed = project(&tasks, FilterStatus::Completed, None);
    assert_eq!(completed, vec![done.clone()]);

    let uncompleted = project(&tasks, FilterStatus::Uncompleted, None);
    assert_eq!(uncompleted, vec![open.clone()]);

    let all = project(&tasks, FilterStatus::All, None);
    assert_eq!(all, tasks);
}

#[test]
fn unknown_filter_param_passes_everything() {
    assert_eq!(FilterStatus::from_param("completed"), FilterStatus::Completed);
    assert_eq!(FilterStatus::from_param("uncompleted"), FilterStatus::Uncompleted);
    assert_eq!(FilterStatus::from_param("all"), FilterStatus::All);
    assert_eq!(FilterStatus::from_param("archived"), FilterStatus::All);
}

#[test]
fn date_sort_is_most_recent_first() {
    // Insertion order 09:00, 11:00, 10:00 must project as 11:00, 10:00, 09:00.
    let nine = task_at("nine", Priority::Normal, 9_000);
    let eleven = task_at("eleven", Priority::Normal, 11_000);
    let ten = task_at("ten", Priority::Normal, 10_000);
    let tasks = vec![nine.clone(), eleven.clone(), ten.clone()];

    let sorted = project(&tasks, FilterStatus::All, Some(SortCriterion::Date));
    assert_eq!(sorted, vec![eleven, ten, nine]);
}

#[test]
fn priority_sort_is_stable_for_equal_ranks() {
    let normal = task_at("normal", Priority::Normal, 1);
    let high_a = task_at("first high", Priority::High, 2);
    let low = task_at("low", Priority::Low, 3);
    let high_b = task_at("second high", Priority::High, 4);
    let tasks = vec![normal.clone(), high_a.clone(), low.clone(), high_b.clone()];

    let sorted = project(&tasks, FilterStatus::All, Some(SortCriterion::Priority));
    assert_eq!(sorted, vec![high_a, high_b, normal, low]);
}

#[test]
fn name_sort_ignores_case() {
    let banana = task_at("banana", Priority::Normal, 1);
    let apple = task_at("Apple", Priority::Normal, 2);
    let cherry = task_at("CHERRY", Priority::Normal, 3);
    let tasks = vec![banana.clone(), apple.clone(), cherry.clone()];

    let sorted = project(&tasks, FilterStatus::All, Some(SortCriterion::Name));
    assert_eq!(sorted, vec![apple, banana, cherry]);
}

#[test]
fn unknown_sort_param_keeps_filtered_order() {
    assert_eq!(SortCriterion::from_param("date"), Some(SortCriterion::Date));
    assert_eq!(
        SortCriterion::from_param("priority"),
        Some(SortCriterion::Priority)
    );
    assert_eq!(SortCriterion::from_param("name"), Some(SortCriterion::Name));
    assert_eq!(SortCriterion::from_param("shuffle"), None);

    let b = task_at("b", Priority::Low, 2);
    let a = task_at("a", Priority::High, 1);
    let tasks = vec![b.clone(), a.clone()];

    let unsorted = project(&tasks, FilterStatus::All, SortCriterion::from_param("shuffle"));
    assert_eq!(unsorted, vec![b, a]);
}

#[test]
fn project_is_idempotent_and_leaves_input_alone() {
    let tasks = vec![
        task_at("gamma", Priority::Low, 3),
        task_at("alpha", Priority::High, 1),
        task_at("beta", Priority::Normal, 2),
    ];
    let input_before = tasks.clone();

    let first = project(&tasks, FilterStatus::All, Some(SortCriterion::Name));
    let second = project(&tasks, FilterStatus::All, Some(SortCriterion::Name));

    assert_eq!(first, second);
    assert_eq!(tasks, input_before);
}
