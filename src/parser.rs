//! Extraction of lanes, elements and edges from a BPMN 2.0 XML document.
//!
//! Two document shapes are supported: a multi-lane collaboration (participants
//! bound to processes, plus message flows) and a single lane-less process,
//! which is treated as one implicit lane spanning the whole document. Matching
//! is done on local tag names so `bpmn:`-prefixed and unprefixed documents
//! both parse.

use std::path::Path;

use log::debug;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use crate::errors::{FlowcheckError, FlowcheckResult};
use crate::models::bpmn::{
    Collaboration, Element, ElementKind, Lane, MessageEdge, ProcessDef, SequenceEdge,
};

pub struct CollaborationParser;

impl CollaborationParser {
    pub fn parse_file(path: &Path) -> FlowcheckResult<Collaboration> {
        let xml = std::fs::read_to_string(path)?;
        Self::parse_str(&xml)
    }

    /// Parse a diagram document. Fails with `MalformedDocument` when required
    /// structural nodes are absent or unparsable. Document order is preserved
    /// in every produced list.
    pub fn parse_str(xml: &str) -> FlowcheckResult<Collaboration> {
        let mut reader = Reader::from_str(xml);

        let mut collaboration = Collaboration::default();
        let mut saw_collaboration = false;
        // Index into collaboration.processes while inside a <process> subtree.
        let mut current_process: Option<usize> = None;

        loop {
            match reader.read_event() {
                Ok(Event::Start(e)) => {
                    Self::handle_open(&e, &mut collaboration, &mut saw_collaboration, &mut current_process, false)?;
                }
                Ok(Event::Empty(e)) => {
                    Self::handle_open(&e, &mut collaboration, &mut saw_collaboration, &mut current_process, true)?;
                }
                Ok(Event::End(e)) => {
                    if e.local_name().as_ref() == b"process" {
                        current_process = None;
                    }
                }
                Ok(Event::Eof) => break,
                Ok(_) => {}
                Err(e) => {
                    return Err(FlowcheckError::MalformedDocument(format!(
                        "XML error at position {}: {}",
                        reader.buffer_position(),
                        e
                    )));
                }
            }
        }

        if collaboration.processes.is_empty() {
            return Err(FlowcheckError::MalformedDocument(
                "no process element found".to_string(),
            ));
        }

        // Lane-less document: treat each process as one implicit lane.
        if !saw_collaboration {
            debug!("no collaboration element, deriving implicit lanes from processes");
            collaboration.lanes = collaboration
                .processes
                .iter()
                .map(|p| Lane {
                    id: p.id.clone(),
                    name: p.name.clone(),
                    process_ref: Some(p.id.clone()),
                })
                .collect();
        }

        debug!(
            "parsed {} lane(s), {} process(es), {} message edge(s)",
            collaboration.lanes.len(),
            collaboration.processes.len(),
            collaboration.message_edges.len()
        );
        Ok(collaboration)
    }

    fn handle_open(
        e: &BytesStart<'_>,
        collaboration: &mut Collaboration,
        saw_collaboration: &mut bool,
        current_process: &mut Option<usize>,
        self_closing: bool,
    ) -> FlowcheckResult<()> {
        let local = e.local_name();
        match local.as_ref() {
            b"collaboration" => {
                *saw_collaboration = true;
            }
            b"participant" => {
                let id = require_attr(e, "id", "participant")?;
                let name = attr(e, "name")?.unwrap_or_else(|| id.clone());
                let process_ref = attr(e, "processRef")?;
                collaboration.lanes.push(Lane { id, name, process_ref });
            }
            b"messageFlow" => {
                let source = require_attr(e, "sourceRef", "messageFlow")?;
                let target = require_attr(e, "targetRef", "messageFlow")?;
                let id = attr(e, "id")?.unwrap_or_else(|| format!("mf_{source}_{target}"));
                collaboration.message_edges.push(MessageEdge { id, source, target });
            }
            b"process" => {
                let id = require_attr(e, "id", "process")?;
                let name = attr(e, "name")?.unwrap_or_else(|| id.clone());
                collaboration.processes.push(ProcessDef {
                    id,
                    name,
                    ..ProcessDef::default()
                });
                if !self_closing {
                    *current_process = Some(collaboration.processes.len() - 1);
                }
            }
            b"sequenceFlow" => {
                if let Some(idx) = *current_process {
                    let source = require_attr(e, "sourceRef", "sequenceFlow")?;
                    let target = require_attr(e, "targetRef", "sequenceFlow")?;
                    let id = attr(e, "id")?.unwrap_or_else(|| format!("sf_{source}_{target}"));
                    collaboration.processes[idx]
                        .sequence_edges
                        .push(SequenceEdge { id, source, target });
                }
            }
            other => {
                let Some(idx) = *current_process else {
                    return Ok(());
                };
                let Ok(local_str) = std::str::from_utf8(other) else {
                    return Ok(());
                };
                if let Some(kind) = ElementKind::from_local_name(local_str) {
                    let id = require_attr(e, "id", local_str)?;
                    let name = attr(e, "name")?.unwrap_or_else(|| id.clone());
                    collaboration.processes[idx].elements.push(Element { id, name, kind });
                }
            }
        }
        Ok(())
    }
}

/// Read one unprefixed attribute off an element, unescaped.
fn attr(e: &BytesStart<'_>, name: &str) -> FlowcheckResult<Option<String>> {
    for a in e.attributes() {
        let a = a.map_err(|err| {
            FlowcheckError::MalformedDocument(format!("bad attribute on <{}>: {}", tag_name(e), err))
        })?;
        if a.key.as_ref() == name.as_bytes() {
            let value = a.unescape_value().map_err(|err| {
                FlowcheckError::MalformedDocument(format!(
                    "bad attribute value on <{}>: {}",
                    tag_name(e),
                    err
                ))
            })?;
            return Ok(Some(value.into_owned()));
        }
    }
    Ok(None)
}

fn require_attr(e: &BytesStart<'_>, name: &str, node: &str) -> FlowcheckResult<String> {
    attr(e, name)?.ok_or_else(|| {
        FlowcheckError::MalformedDocument(format!("<{node}> is missing required attribute '{name}'"))
    })
}

fn tag_name(e: &BytesStart<'_>) -> String {
    String::from_utf8_lossy(e.name().as_ref()).into_owned()
}
