//! Curl multi engine: single-threaded event loop, multiple Easy2 handles.
//!
//! Seeds up to `max_in_flight` transfers, then perform/messages/refill until
//! the batch drains. Each completed body is placed at its request index, so
//! callers see request order even though completion order is arbitrary.

use std::collections::VecDeque;
use std::time::Duration;

use curl::easy::{Easy2, Handler, WriteError};
use curl::multi::{Easy2Handle, Multi};

use super::{FetchOptions, MAX_REDIRECTS};
use crate::error::{Result, TfdError};

/// Handler for one transfer: collects the whole body into an owned buffer.
struct Collector {
    body: Vec<u8>,
}

impl Handler for Collector {
    fn write(&mut self, data: &[u8]) -> std::result::Result<usize, WriteError> {
        self.body.extend_from_slice(data);
        Ok(data.len())
    }
}

/// Active entry in the event loop: handle plus its request index.
type ActiveItem = (Easy2Handle<Collector>, usize);

fn engine(op: &'static str) -> impl Fn(curl::MultiError) -> TfdError {
    move |source| TfdError::Engine { op, source }
}

pub(super) fn fetch_batch(urls: &[String], options: &FetchOptions) -> Result<Vec<Result<Vec<u8>>>> {
    if urls.is_empty() {
        return Ok(Vec::new());
    }

    let multi = Multi::new();
    let mut slots: Vec<Option<Result<Vec<u8>>>> = (0..urls.len()).map(|_| None).collect();
    let mut pending: VecDeque<usize> = (0..urls.len()).collect();
    let mut active: Vec<ActiveItem> = Vec::new();

    refill_active(&multi, urls, options, &mut pending, &mut active, &mut slots)?;

    while !active.is_empty() {
        let running = multi.perform().map_err(engine("perform"))?;

        let mut completed: Vec<(usize, Option<curl::Error>)> = Vec::new();
        multi.messages(|msg| {
            for (pos, (handle, _)) in active.iter().enumerate() {
                if let Some(result) = msg.result_for2(handle) {
                    completed.push((pos, result.err()));
                    break;
                }
            }
        });

        // Remove back to front so earlier positions stay valid.
        completed.sort_by(|a, b| b.0.cmp(&a.0));
        for (pos, transfer_err) in completed {
            let (handle, index) = active.remove(pos);
            let mut easy = multi.remove2(handle).map_err(engine("remove"))?;
            let url = urls[index].as_str();
            let outcome = match transfer_err {
                Some(e) => Err(TfdError::Network {
                    url: url.to_string(),
                    source: e,
                }),
                None => {
                    let code = easy.response_code().unwrap_or(0);
                    if (200..300).contains(&code) {
                        Ok(std::mem::take(&mut easy.get_mut().body))
                    } else {
                        Err(TfdError::Status {
                            url: url.to_string(),
                            code,
                        })
                    }
                }
            };
            slots[index] = Some(outcome);
        }

        refill_active(&multi, urls, options, &mut pending, &mut active, &mut slots)?;

        if running > 0 {
            multi
                .wait(&mut [], Duration::from_millis(100))
                .map_err(engine("wait"))?;
        }
    }

    // The loop refills before it can drain, so every slot is filled by now.
    Ok(slots
        .into_iter()
        .map(|slot| slot.expect("transfer completed"))
        .collect())
}

/// Keeps the active set full. A URL the easy handle refuses outright gets
/// its error slotted like any other per-URL failure; only multi-handle
/// breakage propagates.
fn refill_active(
    multi: &Multi,
    urls: &[String],
    options: &FetchOptions,
    pending: &mut VecDeque<usize>,
    active: &mut Vec<ActiveItem>,
    slots: &mut [Option<Result<Vec<u8>>>],
) -> Result<()> {
    while active.len() < options.max_in_flight {
        let Some(index) = pending.pop_front() else {
            break;
        };
        match add_transfer(multi, &urls[index], options) {
            Ok(handle) => active.push((handle, index)),
            Err(err @ TfdError::Engine { .. }) => return Err(err),
            Err(err) => slots[index] = Some(Err(err)),
        }
    }
    Ok(())
}

fn add_transfer(
    multi: &Multi,
    url: &str,
    options: &FetchOptions,
) -> Result<Easy2Handle<Collector>> {
    let net = |e: curl::Error| TfdError::Network {
        url: url.to_string(),
        source: e,
    };

    let mut easy = Easy2::new(Collector { body: Vec::new() });
    easy.url(url).map_err(net)?;
    easy.follow_location(true).map_err(net)?;
    easy.max_redirections(MAX_REDIRECTS).map_err(net)?;
    easy.connect_timeout(options.connect_timeout).map_err(net)?;
    easy.timeout(options.request_timeout).map_err(net)?;
    multi.add2(easy).map_err(engine("add"))
}
