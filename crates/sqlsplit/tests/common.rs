#![allow(missing_docs)]
#![allow(dead_code)]

/// A profiling session script: schema, a PL/pgSQL function whose body is
/// full of semicolons, seed data with tricky literals, and a trailing call
/// without a final `;`.
pub const SCRIPT: &str = r#"-- pgbench-style workload for the profiler
CREATE TABLE accounts (
    aid      integer PRIMARY KEY,
    abalance integer DEFAULT 0,
    filler   text
);

CREATE OR REPLACE FUNCTION fetch_abalance(p_aid integer)
RETURNS integer AS $$
DECLARE
    result integer;
BEGIN
    SELECT abalance INTO result FROM accounts WHERE aid = p_aid;
    RETURN result;
END;
$$ LANGUAGE plpgsql;

/* seed data; two rows */
INSERT INTO accounts VALUES (1, 100, 'first; row'), (2, 200, E'it\'s; second');
SELECT "filler;" FROM (SELECT filler AS "filler;" FROM accounts) AS s;
SELECT fetch_abalance(1)
"#;

/// Profiler housekeeping as saved by a Windows editor.
pub const CRLF_SCRIPT: &str = "SET search_path TO profiler;\r\n\
    -- comment; with a semicolon\r\n\
    SELECT pl_profiler_reset_local();\r\n\
    \r\n\
    SELECT $tag$ ; $$ ; $tag$ AS body;\r\n";
