//! Storage Integration Tests
//!
//! Exercises both repositories against the in-memory backend.

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use crate::domain::{ExportBundle, Item, Setting};
    use crate::storage::{
        ItemRepository, MemoryBackend, SettingRepository, StorageBackend, ITEM_LIST_KEY,
        SETTING_KEY,
    };
    use crate::FillRequest;

    fn test_backend() -> Rc<MemoryBackend> {
        Rc::new(MemoryBackend::new())
    }

    #[tokio::test]
    async fn test_list_starts_empty() {
        let repo = ItemRepository::new(test_backend());
        assert!(repo.list().await.is_empty());
    }

    #[tokio::test]
    async fn test_append_preserves_order() {
        let repo = ItemRepository::new(test_backend());

        repo.append(Item::new("first", "1")).await;
        repo.append(Item::new("second", "2")).await;
        repo.append(Item::new("third", "3")).await;

        let names: Vec<_> = repo.list().await.into_iter().map(|i| i.name).collect();
        assert_eq!(names, ["first", "second", "third"]);
    }

    #[tokio::test]
    async fn test_saved_list_round_trips() {
        let repo = ItemRepository::new(test_backend());

        let mut item = Item::new("Gmail", "user@example.com");
        item.instruction = vec!["Open gmail.com".to_string(), "Press next".to_string()];
        repo.save_list(&[item.clone()]);

        assert_eq!(repo.list().await, vec![item]);
    }

    #[tokio::test]
    async fn test_remove_at_middle() {
        let repo = ItemRepository::new(test_backend());
        repo.save_list(&[
            Item::new("a", "1"),
            Item::new("b", "2"),
            Item::new("c", "3"),
        ]);

        repo.remove_at(1).await;

        let names: Vec<_> = repo.list().await.into_iter().map(|i| i.name).collect();
        assert_eq!(names, ["a", "c"]);
    }

    #[tokio::test]
    async fn test_remove_at_out_of_range_is_a_noop() {
        let repo = ItemRepository::new(test_backend());
        repo.save_list(&[Item::new("only", "1")]);

        repo.remove_at(5).await;

        assert_eq!(repo.list().await.len(), 1);
    }

    #[tokio::test]
    async fn test_replace_at() {
        let repo = ItemRepository::new(test_backend());
        repo.save_list(&[Item::new("a", "1"), Item::new("b", "2")]);

        repo.replace_at(1, Item::new("b", "22"))
            .await
            .expect("replace failed");

        let items = repo.list().await;
        assert_eq!(items[0].value, "1");
        assert_eq!(items[1].value, "22");
    }

    #[tokio::test]
    async fn test_replace_at_out_of_range_fails_without_writing() {
        let backend = test_backend();
        let repo = ItemRepository::new(Rc::clone(&backend));
        repo.save_list(&[Item::new("a", "1")]);
        let raw_before = backend.get(ITEM_LIST_KEY).await;

        let result = repo.replace_at(3, Item::new("x", "9")).await;

        assert!(result.is_err());
        assert_eq!(backend.get(ITEM_LIST_KEY).await, raw_before);
    }

    #[tokio::test]
    async fn test_unreadable_item_record_reads_as_empty() {
        let backend = test_backend();
        backend.set(ITEM_LIST_KEY, "{not json".to_string());

        let repo = ItemRepository::new(backend);
        assert!(repo.list().await.is_empty());
    }

    #[tokio::test]
    async fn test_setting_defaults_when_absent() {
        let repo = SettingRepository::new(test_backend());
        assert_eq!(repo.load().await, Setting::default());
    }

    #[tokio::test]
    async fn test_unreadable_setting_reads_as_default() {
        let backend = test_backend();
        backend.set(SETTING_KEY, "[]".to_string());

        let repo = SettingRepository::new(backend);
        assert_eq!(repo.load().await, Setting::default());
    }

    #[tokio::test]
    async fn test_setting_round_trips() {
        let repo = SettingRepository::new(test_backend());

        repo.save(&Setting::new("#identifierId"));

        assert_eq!(repo.load().await.textbox_id, "#identifierId");
    }

    #[tokio::test]
    async fn test_records_live_under_fixed_keys() {
        let backend = test_backend();
        let items = ItemRepository::new(Rc::clone(&backend));
        let settings = SettingRepository::new(Rc::clone(&backend));

        items.save_list(&[Item::new("a", "1")]);
        settings.save(&Setting::new("#q"));

        assert!(backend.get("AUTO_SEARCH_STORAGE_ITEMS").await.is_some());
        assert!(backend.get("AUTO_SEARCH_STORAGE_SETTINGS").await.is_some());
    }

    #[tokio::test]
    async fn test_records_do_not_clobber_each_other() {
        let backend = test_backend();
        let items = ItemRepository::new(Rc::clone(&backend));
        let settings = SettingRepository::new(Rc::clone(&backend));

        items.save_list(&[Item::new("a", "1")]);
        settings.save(&Setting::new("#q"));

        assert_eq!(items.list().await.len(), 1);
        assert_eq!(settings.load().await.textbox_id, "#q");
    }

    #[tokio::test]
    async fn test_interleaved_writers_resolve_last_write_wins() {
        // Two read-modify-write cycles that both start from the empty
        // list: the second save overwrites the first.
        let backend = test_backend();
        let repo = ItemRepository::new(Rc::clone(&backend));

        let mut first = repo.list().await;
        let mut second = repo.list().await;

        first.push(Item::new("from-first", "1"));
        repo.save_list(&first);

        second.push(Item::new("from-second", "2"));
        repo.save_list(&second);

        let names: Vec<_> = repo.list().await.into_iter().map(|i| i.name).collect();
        assert_eq!(names, ["from-second"]);
    }

    #[tokio::test]
    async fn test_item_lifecycle_end_to_end() {
        let repo = ItemRepository::new(test_backend());

        let mut item = Item::new("Gmail", "test@example.com");
        item.instruction = vec!["Open gmail.com".to_string()];
        repo.append(item.clone()).await;
        assert_eq!(repo.list().await, vec![item]);

        repo.replace_at(0, Item::new("Gmail", "new@example.com"))
            .await
            .expect("replace failed");
        let items = repo.list().await;
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].value, "new@example.com");
        assert!(items[0].instruction.is_empty());

        repo.remove_at(0).await;
        assert!(repo.list().await.is_empty());
    }

    #[tokio::test]
    async fn test_saved_item_and_setting_drive_a_fill_request() {
        // The usual flow: save an account item and the target selector,
        // reopen, pick the item, build the message for the page.
        let backend = test_backend();
        ItemRepository::new(Rc::clone(&backend))
            .append(Item::new("gmail", "user@example.com"))
            .await;
        SettingRepository::new(Rc::clone(&backend)).save(&Setting::new("#identifierId"));

        // Fresh repositories stand in for a popup reopen.
        let items = ItemRepository::new(Rc::clone(&backend)).list().await;
        let setting = SettingRepository::new(Rc::clone(&backend)).load().await;
        let picked = items
            .iter()
            .find(|i| i.name.contains("gmail"))
            .expect("saved item not found");

        let request = FillRequest::new(setting.textbox_id.clone(), picked.value.clone());
        assert_eq!(
            serde_json::to_string(&request).unwrap(),
            r##"{"kind":"autoSearchFill","selector":"#identifierId","value":"user@example.com"}"##
        );
    }

    #[tokio::test]
    async fn test_export_then_import_restores_both_records() {
        let source = test_backend();
        let items = ItemRepository::new(Rc::clone(&source));
        let settings = SettingRepository::new(Rc::clone(&source));
        items.save_list(&[Item::new("a", "1"), Item::new("b", "2")]);
        settings.save(&Setting::new("#q"));

        let exported = ExportBundle {
            items: items.list().await,
            setting: settings.load().await,
        }
        .to_json_pretty();

        // Import into a fresh store, as if on another machine.
        let target = test_backend();
        let bundle = ExportBundle::from_json(&exported).expect("exported JSON must parse");
        ItemRepository::new(Rc::clone(&target)).save_list(&bundle.items);
        SettingRepository::new(Rc::clone(&target)).save(&bundle.setting);

        let restored = ItemRepository::new(Rc::clone(&target)).list().await;
        assert_eq!(restored.len(), 2);
        assert_eq!(restored[0].name, "a");
        assert_eq!(SettingRepository::new(target).load().await.textbox_id, "#q");
    }
}
