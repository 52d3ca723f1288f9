#[derive(Debug, Clone)]
pub enum Message {
    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigCurrent(String), // pretty printed json
    ConfigModuleUser,
    ConfigModuleServer,
    ConfigModuleDatabase,
    NoActingEmployee,

    // === EMPLOYEE MESSAGES ===
    EmployeesHeader,
    NoEmployeesFound,
    EmployeeNotFound(i64),
    EmployeeEmailTaken(String),
    EmployeeCreated(i64, String), // id, name
    EmployeeDeleted(i64),
    EmployeeRolesUpdated(i64, String), // id, roles
    CannotDeleteSelf,
    ConfirmDeleteEmployee(i64),

    // === CLOCKING MESSAGES ===
    ClockingStarted(i64, String), // id, employee name
    ClockingEnded(i64, String),   // id, duration
    ClockingDeleted(i64),
    ClockingsHeader(usize),
    NoClockingsFound,
    NoClockingInProgress,
    ConfirmDeleteClocking(i64),

    // === ALLOWANCE MESSAGES ===
    AllowanceCurrent(String),
    AllowanceIsDefault,
    AllowanceUpdated(String, String), // when, by whom
    AllowanceSaved(String),

    // === REPORT MESSAGES ===
    ReportHeader(String),
    DashboardHeader(String, String), // employee name, period
    HistoryHeader(String),
    NoHoursForPeriod(String),

    // === CLOSURE MESSAGES ===
    PreviewHeader(String),
    ClockingsStillInProgress(usize),
    ConfirmCloseMonth(String),
    MonthClosed(String, i64), // period, closure id
    MonthNotClosed(String),
    ClosuresHeader,
    NoClosuresFound,
    ClosureNotFound(i64),
    ConfirmReopenClosure(i64),
    ClosureReopened(i64, String),      // id, period
    ClosureStatusOf(String, String),   // period, status
    ClosureStatusChanged(i64, String), // id, status
    ClosureNotesUpdated(i64),
    ClosureDetailNotesUpdated(i64),

    // === EXPORT MESSAGES ===
    ExportCompleted(String),

    // === SEED AND SYNC MESSAGES ===
    SeedRefused,
    SeedCompleted(usize, usize), // employees, clockings
    ServerNotConfigured,
    SyncCompleted(usize, usize), // created, updated
    RemoteRequestFailed(String),
    RemoteInvalidUserId(String, String), // remote id, user id

    // === PROMPTS ===
    PromptSelectModules,
    PromptEmployeeId,
    PromptServerApiUrl,
    PromptServerAuthToken,
    PromptDatabasePath,

    // === GENERAL MESSAGES ===
    OperationCancelled,

    // === MIGRATION MESSAGES ===
    MigrationsFound(usize),        // count
    RunningMigration(u32, String), // version, name
    MigrationCompleted(u32),       // version
    MigrationFailed(u32, String),  // version, error
    AllMigrationsCompleted,
    DatabaseVersion(u32),
    DatabaseUpToDate,
    DatabaseNeedsUpdate,
    MigrationHistory,
    MigrationHistoryEntry(u32, String, String), // version, name, applied at
    NothingToRollback,
    RollingBack(u32, u32),  // from, to
    RollbackCompleted(u32), // version
}
