use std::io::{BufRead, Write};

use anyhow::Result;
use tracing::error;
use wordtrie_engine::{Dict, DictError};

use crate::protocol::{
    AddRequest, AddedResponse, DistanceRequest, DistanceResponse, ErrorCode, ErrorResponse,
    LookupRequest, LookupResponse, RequestBody, ResponseBody, ShellRequest, ShellResponse,
    StatsResponse, SuggestRequest, SuggestResponse,
};

/// Runs a query session: one JSON request per line in, one JSON
/// response per line out. Blank lines are skipped; EOF ends the
/// session.
pub fn run<R: BufRead, W: Write>(
    reader: R,
    mut writer: W,
    dict: &mut Dict,
    pretty: bool,
) -> Result<()> {
    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let response = process_line(&line, dict);
        let payload = if pretty {
            serde_json::to_string_pretty(&response)?
        } else {
            serde_json::to_string(&response)?
        };
        writer.write_all(payload.as_bytes())?;
        writer.write_all(b"\n")?;
        writer.flush()?;
    }
    Ok(())
}

fn process_line(line: &str, dict: &mut Dict) -> ShellResponse {
    match serde_json::from_str::<ShellRequest>(line) {
        Ok(request) => handle_request(request, dict),
        Err(err) => {
            error!("invalid request JSON: {err}");
            ShellResponse {
                id: String::new(),
                body: ResponseBody::Error(ErrorResponse {
                    code: ErrorCode::InvalidRequest,
                    message: format!("invalid JSON payload: {err}"),
                }),
            }
        }
    }
}

pub fn handle_request(request: ShellRequest, dict: &mut Dict) -> ShellResponse {
    let id = request.id;
    let body = match request.body {
        RequestBody::Ping => ResponseBody::Pong,
        RequestBody::Add(AddRequest { word }) => match dict.insert(&word) {
            Ok(newly_added) => {
                // The insert just marked the word, so this cannot miss.
                let frequency = match dict.lookup(&word) {
                    Ok(Some(node)) => dict.frequency(node),
                    _ => 0,
                };
                ResponseBody::Added(AddedResponse {
                    word,
                    newly_added,
                    frequency,
                })
            }
            Err(err) => invalid_symbol(err),
        },
        RequestBody::Lookup(LookupRequest { word }) => match dict.lookup(&word) {
            Ok(Some(node)) => ResponseBody::Lookup(LookupResponse {
                word,
                found: true,
                frequency: dict.frequency(node),
            }),
            Ok(None) => ResponseBody::Lookup(LookupResponse {
                word,
                found: false,
                frequency: 0,
            }),
            Err(err) => invalid_symbol(err),
        },
        RequestBody::Suggest(SuggestRequest { prefix }) => {
            match dict.suggest_continuation(&prefix) {
                Ok(continuation) => ResponseBody::Suggest(SuggestResponse {
                    prefix,
                    continuation: continuation.map(String::from).unwrap_or_default(),
                }),
                Err(err) => invalid_symbol(err),
            }
        }
        RequestBody::Distance(DistanceRequest { a, b }) => {
            match (dict.lookup(&a), dict.lookup(&b)) {
                // Unresolved words fall through as None: distance 0.
                (Ok(node_a), Ok(node_b)) => ResponseBody::Distance(DistanceResponse {
                    distance: dict.ancestor_distance(node_a, node_b),
                }),
                (Err(err), _) | (_, Err(err)) => invalid_symbol(err),
            }
        }
        RequestBody::Stats => ResponseBody::Stats(StatsResponse {
            words: dict.word_count(),
            nodes: dict.node_count(),
            most_common: dict.most_common_frequency(),
        }),
    };
    ShellResponse { id, body }
}

fn invalid_symbol(err: DictError) -> ResponseBody {
    ResponseBody::Error(ErrorResponse {
        code: ErrorCode::InvalidSymbol,
        message: err.to_string(),
    })
}
