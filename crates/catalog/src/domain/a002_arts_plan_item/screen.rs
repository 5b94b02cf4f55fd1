//! Экран годового плана: список с фильтрами и форма создания/редактирования

use contracts::domain::a002_arts_plan_item::{ArtsPlanItem, ArtsPlanItemDto, ArtsPlanItemId};
use contracts::enums::Category;
use contracts::shared::filter::CategoryScope;

use crate::shared::data::RecordStore;
use crate::shared::errors::CatalogResult;
use crate::shared::mutation::MutationGateway;
use crate::shared::screen::{ListScreen, ListView};

/// Категория новой записи, когда экран открыт без области
const DEFAULT_CATEGORY: Category = Category::Poetry;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorMode {
    Create,
    Edit(ArtsPlanItemId),
}

/// Открытая форма
#[derive(Debug, Clone, PartialEq)]
pub struct Editor {
    pub mode: EditorMode,
    pub form: ArtsPlanItemDto,
}

#[derive(Debug, Clone)]
pub struct ArtsPlanScreen {
    list: ListScreen<ArtsPlanItem>,
    editor: Option<Editor>,
}

impl ArtsPlanScreen {
    pub fn new(store: RecordStore<ArtsPlanItem>, scope: CategoryScope) -> Self {
        Self {
            list: ListScreen::new(MutationGateway::new(store), scope),
            editor: None,
        }
    }

    pub fn list(&self) -> &ListScreen<ArtsPlanItem> {
        &self.list
    }

    pub fn list_mut(&mut self) -> &mut ListScreen<ArtsPlanItem> {
        &mut self.list
    }

    pub fn view(&self) -> ListView<ArtsPlanItem> {
        self.list.view()
    }

    pub fn editor(&self) -> Option<&Editor> {
        self.editor.as_ref()
    }

    fn blank_form(&self) -> ArtsPlanItemDto {
        ArtsPlanItemDto::blank(self.list.filter().category.category().unwrap_or(DEFAULT_CATEGORY))
    }

    /// Открыть пустую форму; категория берётся из области экрана
    pub fn open_create(&mut self) -> &mut ArtsPlanItemDto {
        let form = self.blank_form();
        &mut self
            .editor
            .insert(Editor {
                mode: EditorMode::Create,
                form,
            })
            .form
    }

    /// Открыть форму, заполненную данными пункта
    pub fn open_edit(&mut self, id: ArtsPlanItemId) -> CatalogResult<&mut ArtsPlanItemDto> {
        let form = self.list.gateway().get(id)?.to_dto();
        Ok(&mut self
            .editor
            .insert(Editor {
                mode: EditorMode::Edit(id),
                form,
            })
            .form)
    }

    pub fn form_mut(&mut self) -> Option<&mut ArtsPlanItemDto> {
        self.editor.as_mut().map(|e| &mut e.form)
    }

    /// Сохранить форму
    ///
    /// Создаёт или обновляет пункт в зависимости от режима; при успехе форма
    /// закрывается, при ошибке остаётся открытой с введёнными данными.
    /// Без открытой формы возвращает `None`.
    pub fn submit(&mut self) -> Option<CatalogResult<ArtsPlanItem>> {
        let editor = self.editor.as_ref()?;
        let result = match editor.mode {
            EditorMode::Create => self.list.create(editor.form.clone()),
            EditorMode::Edit(id) => self.list.update(id, &editor.form.clone().into_patch()),
        };
        if result.is_ok() {
            self.editor = None;
        }
        Some(result)
    }

    pub fn close_editor(&mut self) {
        self.editor = None;
    }

    pub fn toggle_status(&mut self, id: ArtsPlanItemId) -> CatalogResult<ArtsPlanItem> {
        self.list.gateway_mut().toggle_status(id)
    }

    /// Удалить пункт; открытая форма этого пункта закрывается
    pub fn delete(&mut self, id: ArtsPlanItemId) -> CatalogResult<ArtsPlanItem> {
        let removed = self.list.delete(id)?;
        if matches!(self.editor, Some(Editor { mode: EditorMode::Edit(editing), .. }) if editing == id)
        {
            self.editor = None;
        }
        Ok(removed)
    }
}
