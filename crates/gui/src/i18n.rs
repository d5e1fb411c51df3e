use std::sync::atomic::{AtomicU8, Ordering};

pub use crate::state::settings::Language as Lang;

static CURRENT_LANG: AtomicU8 = AtomicU8::new(0); // 0=Ru (default)

pub fn lang() -> Lang {
    match CURRENT_LANG.load(Ordering::Relaxed) {
        1 => Lang::En,
        _ => Lang::Ru,
    }
}

pub fn set_lang(l: Lang) {
    CURRENT_LANG.store(
        match l {
            Lang::Ru => 0,
            Lang::En => 1,
        },
        Ordering::Relaxed,
    );
}

/// Translate a key to the current language.
pub fn t(key: &str) -> &'static str {
    let ru = lang() == Lang::Ru;
    match key {
        // ── Main menus ──────────────────────────────────────
        "menu.file" => if ru { "Файл" } else { "File" },
        "menu.save" => if ru { "Сохранить  Ctrl+S" } else { "Save  Ctrl+S" },
        "menu.reload" => if ru { "Перечитать с диска" } else { "Reload from disk" },
        "menu.quit" => if ru { "Выход" } else { "Quit" },

        "menu.view" => if ru { "Вид" } else { "View" },
        "menu.grid" => if ru { "Сетка" } else { "Grid" },
        "menu.reset_cameras" => if ru { "Сбросить камеры" } else { "Reset cameras" },
        "menu.language" => if ru { "Язык" } else { "Language" },

        // ── Views ───────────────────────────────────────────
        "view.top" => if ru { "Сверху" } else { "Top" },
        "view.front" => if ru { "Спереди" } else { "Front" },
        "view.right" => if ru { "Справа" } else { "Right" },

        // ── Tool panel ──────────────────────────────────────
        "tb.tool" => if ru { "Инструмент" } else { "Tool" },
        "mode.move" => if ru { "Перемещение" } else { "Move" },
        "mode.scale" => if ru { "Масштаб" } else { "Scale" },
        "mode.rotate" => if ru { "Поворот" } else { "Rotate" },
        "tb.selection" => if ru { "Выделение" } else { "Selection" },
        "tb.deselect" => if ru { "Снять выделение" } else { "Deselect" },

        // ── Block properties ────────────────────────────────
        "prop.name" => if ru { "Имя" } else { "Name" },
        "prop.material" => if ru { "Материал" } else { "Material" },
        "prop.position" => if ru { "Позиция" } else { "Position" },
        "prop.size" => if ru { "Размер" } else { "Size" },
        "prop.rotation" => if ru { "Поворот" } else { "Rotation" },

        // ── Status bar ──────────────────────────────────────
        "status.blocks" => if ru { "Блоков" } else { "Blocks" },
        "status.selected" => if ru { "Выбран" } else { "Selected" },
        "status.ready" => if ru { "Готово" } else { "Ready" },
        "status.dragging" => if ru { "Перетаскивание" } else { "Dragging" },
        "status.zoom" => if ru { "Масштаб вида" } else { "View scale" },
        "status.unsaved" => if ru { "не сохранено" } else { "unsaved" },
        "hint.cycle" => if ru {
            "Повторный щелчок выбирает следующий блок под курсором"
        } else {
            "Click again to cycle through stacked blocks"
        },

        // ── Dialogs ─────────────────────────────────────────
        "msg.title" => "Wallplast",
        "msg.saved" => if ru { "Карта сохранена" } else { "Map saved" },
        "msg.save_failed" => if ru { "Не удалось сохранить карту" } else { "Failed to save map" },
        "msg.reload_failed" => if ru { "Не удалось прочитать карту" } else { "Failed to read map" },

        _ => "???",
    }
}
