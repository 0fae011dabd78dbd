//! Application constants for the AQS reducer
//!
//! This module contains the line and schema bounds, the private delimiter
//! byte, and the user-facing strings used throughout the application.

// =============================================================================
// Line and Schema Bounds
// =============================================================================

/// Maximum number of bytes of one input line that are tokenized and decoded
pub const MAX_LINE_LENGTH: usize = 1024;

/// Number of fields in the AQS annual summary schema
pub const MAX_FIELDS: usize = 55;

/// ASCII unit separator. Stands in for unquoted commas after tokenization;
/// a control byte outside the printable range, guaranteed absent from field
/// content.
pub const UNIT_SEPARATOR: u8 = 0x1F;

// =============================================================================
// Prompt Configuration
// =============================================================================

/// Maximum number of bytes the user can type into the prompt buffer
pub const PROMPT_BUFFER_CAPACITY: usize = 200;

/// Width the prompt line is padded to when it is rewritten in place, so a
/// shorter value fully overwrites a longer one
pub const PROMPT_DISPLAY_WIDTH: usize = 50;

/// Instruction text printed before the prompt loop starts
pub const PROMPT_INSTRUCTION: &str =
    "Enter parameter (Tab for autocomplete and Increment, Shift + Tab to Decrement):";

/// Heading printed above the numbered distinct-parameter list
pub const UNIQUE_PARAMETERS_HEADING: &str = "Unique parameters:";

// =============================================================================
// Performance and Monitoring Constants
// =============================================================================

/// Progress reporting update interval (number of ingested lines)
pub const PROGRESS_UPDATE_INTERVAL: usize = 1000;
