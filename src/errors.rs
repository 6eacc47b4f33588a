use fractic_server_error::{define_client_error, define_internal_error};

// IO-related.
define_client_error!(ReadError, "Error reading file.");

// Configuration-related.
define_client_error!(InvalidRon, "Invalid {ron_type} (invalid RON format).", { ron_type: &str });
define_client_error!(InvalidConfig, "Invalid configuration: {details}.", { details: &str });
define_client_error!(
    InvalidPayrollPeriod,
    "Invalid payroll period: '{period}'. Expected YYYYMM.",
    { period: &str }
);
define_client_error!(
    InvalidKpiMonth,
    "Invalid KPI month: '{month}'. Expected YYYY-MM.",
    { month: &str }
);

// Payload-related.
define_client_error!(
    MissingRawData,
    "Accounting operations payload is missing the 'rawData' field."
);
define_client_error!(
    MalformedOperationsPayload,
    "Malformed accounting operations payload: expected an object or an array, found {found}.",
    { found: &str }
);
define_client_error!(InvalidJson, "Invalid JSON payload.");
define_client_error!(InvalidIsoDate, "Invalid ISO date: {date}.", { date: &str });
define_client_error!(
    InvalidAccountingAmount,
    "Invalid accounting amount: '{value}'.",
    { value: &str }
);

// Upstream-related.
define_internal_error!(
    HttpClientSetupFailed,
    "Failed to set up the HTTP client for the {api} API.",
    { api: &str }
);
define_internal_error!(
    UpstreamUnreachable,
    "The {api} API could not be reached.",
    { api: &str }
);
define_internal_error!(
    UpstreamStatus,
    "The {api} API answered with HTTP status {status}.",
    { api: &str, status: u16 }
);
define_internal_error!(
    MalformedResponse,
    "The {api} API returned a response that could not be decoded.",
    { api: &str }
);

// Presentation-related.
define_internal_error!(CsvExportFailed, "Failed to export employee salaries as CSV.");
