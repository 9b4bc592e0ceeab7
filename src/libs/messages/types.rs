#[derive(Debug, Clone)]
pub enum Message {
    // === TASK MESSAGES ===
    TodoAdded,
    TodoDeleted,
    TodoStatusUpdated,
    TodoUpdated,
    TodosLoadFailed,
    TodosFetchFailed,
    TodoAddFailed,
    TodoDeleteFailed,
    TodoUpdateFailed,
    TodoTitleEmpty,
    NoTasksFound,
    TodosRestoredFromRemote(usize),
    CacheCleared,

    // === LIST MESSAGES ===
    ListHeader,
    PageFooter {
        page: usize,
        pages: usize,
        total: usize,
    },
    TaskNotOnPage(i64),
    NotEditing,
    EditingTask(String),
    ErrorBanner(String),

    // === SESSION MESSAGES ===
    PromptSessionAction,
    SessionAdd,
    SessionToggle,
    SessionEdit,
    SessionSaveEdit,
    SessionCancelEdit,
    SessionDelete,
    SessionNextPage,
    SessionPreviousPage,
    SessionRefresh,
    SessionQuit,
    PromptNewTitle,
    PromptSelectTask,
    PromptEditTitle,
    NoTasksOnPage,
    SessionEnded,

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigModuleApi,
    ConfigModuleList,
    PromptSelectModules,
    PromptApiBaseUrl,
    PromptApiUserId,
    PromptPageSize,
    PageSizeMustBePositive,
    PromptSyncScope,
    SyncScopePage,
    SyncScopeCollection,
    PromptCacheKey,
}
