mod common;

use common::ScriptedDialogs;
use proptest::prelude::*;
use tiny_pad::style::{StyleTable, StyleTag};
use tiny_pad::{Command, Editor};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn saved_text_reopens_identically(content in "\\PC*") {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("doc.txt");

        let mut editor = Editor::headless();
        editor.execute(Command::InsertText(content.clone()), &mut ScriptedDialogs::new());
        editor.execute(Command::SaveAs, &mut ScriptedDialogs::new().save(&path));

        let mut reopened = Editor::headless();
        reopened.execute(Command::Open, &mut ScriptedDialogs::new().open(&path));
        prop_assert_eq!(reopened.text(), content.as_str());
    }

    #[test]
    fn bold_twice_restores_styles(
        text in "[a-z ]{1,40}",
        a in 0usize..40,
        b in 0usize..40,
        existing in proptest::option::of((0usize..40, 0usize..40)),
    ) {
        let len = text.len();
        let (start, end) = (a.min(b).min(len), a.max(b).min(len));
        prop_assume!(start < end);

        let mut editor = Editor::headless();
        let mut dialogs = ScriptedDialogs::new();
        editor.execute(Command::InsertText(text), &mut dialogs);
        if let Some((x, y)) = existing {
            let (x, y) = (x.min(y).min(len), x.max(y).min(len));
            editor.select(x..y);
            editor.execute(Command::ToggleItalic, &mut dialogs);
        }

        let before = editor.styles().clone();
        editor.select(start..end);
        editor.execute(Command::ToggleBold, &mut dialogs);
        prop_assert!(editor.styles().covers(StyleTag::Bold, &(start..end)));
        editor.execute(Command::ToggleBold, &mut dialogs);
        prop_assert_eq!(editor.styles(), &before);
    }

    #[test]
    fn spans_stay_disjoint_and_sorted(
        ops in proptest::collection::vec((any::<bool>(), 0usize..50, 0usize..50), 1..20),
    ) {
        let mut table = StyleTable::new();
        for (add, x, y) in ops {
            let range = x.min(y)..x.max(y);
            if add {
                table.add(StyleTag::Bold, range);
            } else {
                table.remove(StyleTag::Bold, range);
            }
        }

        let spans = table.spans(StyleTag::Bold);
        for span in spans {
            prop_assert!(span.start < span.end);
        }
        for pair in spans.windows(2) {
            prop_assert!(pair[0].end < pair[1].start);
        }
    }
}
