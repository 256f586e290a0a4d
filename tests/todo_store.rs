use std::fs;

use chrono::{Duration, Utc};
use persona_kit::models::TodoCategory;
use persona_kit::store::record_history;
use persona_kit::todo::LogReminders;
use persona_kit::{
    HistoryRepository, JsonStore, QuizResult, Todo, TodoFilter, TodoList, TodoRepository,
};
use tempfile::tempdir;

#[test]
fn first_launch_seeds_and_persists_sample_tasks() {
    let dir = tempdir().unwrap();
    let list = TodoList::open(JsonStore::new(dir.path()).unwrap(), LogReminders, Utc::now()).unwrap();
    assert_eq!(list.todos().len(), 4);

    let stored = TodoRepository::load(&JsonStore::new(dir.path()).unwrap()).unwrap();
    assert_eq!(stored, list.todos());
}

#[test]
fn tasks_survive_reopening_the_store() {
    let dir = tempdir().unwrap();
    let now = Utc::now();

    let id = {
        let store = JsonStore::new(dir.path()).unwrap();
        let mut list = TodoList::open(store, LogReminders, now).unwrap();
        let mut todo = Todo::new("  Renew passport ")
            .with_category(TodoCategory::Personal)
            .with_due_date(now + Duration::days(3));
        todo.reminder_enabled = true;
        list.save(todo).unwrap().id
    };

    let list = TodoList::open(JsonStore::new(dir.path()).unwrap(), LogReminders, now).unwrap();
    let todo = list.get(id).unwrap();
    assert_eq!(todo.title, "Renew passport");
    assert!(todo.reminder_enabled);
    assert_eq!(list.todos()[0].id, id);
    assert_eq!(list.filtered(TodoFilter::Personal, "passport").len(), 1);
}

#[test]
fn unreadable_todo_file_falls_back_to_samples() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("todos.json"), "{ not json").unwrap();

    let list = TodoList::open(JsonStore::new(dir.path()).unwrap(), LogReminders, Utc::now()).unwrap();
    assert_eq!(list.todos().len(), 4);
}

#[test]
fn history_is_newest_first_across_reopen() {
    let dir = tempdir().unwrap();
    let result = |title: &str| QuizResult {
        quiz_title: "Animal Quiz".to_string(),
        result_title: title.to_string(),
        result_description: String::new(),
        dominant_bucket: "A".to_string(),
    };

    let store = JsonStore::new(dir.path()).unwrap();
    record_history(&store, &result("The Loyal Companion"), Utc::now()).unwrap();
    record_history(&store, &result("The Free Spirit"), Utc::now()).unwrap();

    let entries = HistoryRepository::load(&JsonStore::new(dir.path()).unwrap());
    let titles: Vec<&str> = entries.iter().map(|e| e.result_title.as_str()).collect();
    assert_eq!(titles, ["The Free Spirit", "The Loyal Companion"]);

    store.clear().unwrap();
    assert!(HistoryRepository::load(&store).is_empty());
}
