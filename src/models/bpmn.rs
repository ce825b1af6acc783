use serde::{Deserialize, Serialize};

/// The node kinds a diagram element can take. All BPMN task flavors (userTask,
/// serviceTask, sendTask, ...) collapse to `Task`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ElementKind {
    Task,
    StartEvent,
    EndEvent,
    ExclusiveGateway,
    InclusiveGateway,
    ParallelGateway,
}

impl ElementKind {
    /// Map a BPMN local tag name to an element kind. Tags that do not describe a
    /// flow node we model (subProcess, intermediate events, complex gateways, ...)
    /// return `None` and are skipped by the parser.
    pub fn from_local_name(name: &str) -> Option<Self> {
        match name {
            "task" | "userTask" | "serviceTask" | "sendTask" | "receiveTask" | "manualTask"
            | "scriptTask" | "businessRuleTask" => Some(ElementKind::Task),
            "startEvent" => Some(ElementKind::StartEvent),
            "endEvent" => Some(ElementKind::EndEvent),
            "exclusiveGateway" => Some(ElementKind::ExclusiveGateway),
            "inclusiveGateway" => Some(ElementKind::InclusiveGateway),
            "parallelGateway" => Some(ElementKind::ParallelGateway),
            _ => None,
        }
    }

    /// Tasks and gateways get the pre-place/transition/post-place triple in the
    /// net; start and end events anchor to the lane's start/end places instead.
    pub fn has_transition(&self) -> bool {
        !matches!(self, ElementKind::StartEvent | ElementKind::EndEvent)
    }
}

/// One diagram node. Created during parsing and immutable thereafter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Element {
    pub id: String,
    pub name: String,
    pub kind: ElementKind,
}

/// An ordered pair (source, target) within one lane.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SequenceEdge {
    pub id: String,
    pub source: String,
    pub target: String,
}

/// An ordered pair (source, target) crossing lane boundaries. Message edges are
/// asynchronous, unbounded-buffer links; each carries a unique id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageEdge {
    pub id: String,
    pub source: String,
    pub target: String,
}

/// One actor's sub-process. `process_ref` may dangle (or be absent), in which
/// case the lane simply has no elements.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Lane {
    pub id: String,
    pub name: String,
    pub process_ref: Option<String>,
}

/// The element and edge set of one process, in document order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProcessDef {
    pub id: String,
    pub name: String,
    pub elements: Vec<Element>,
    pub sequence_edges: Vec<SequenceEdge>,
}

impl ProcessDef {
    pub fn element(&self, id: &str) -> Option<&Element> {
        self.elements.iter().find(|e| e.id == id)
    }
}

/// Everything the parser extracts from a diagram document. Lists preserve
/// document order so repeated runs produce identical output.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Collaboration {
    pub lanes: Vec<Lane>,
    pub processes: Vec<ProcessDef>,
    pub message_edges: Vec<MessageEdge>,
}

impl Collaboration {
    pub fn process(&self, id: &str) -> Option<&ProcessDef> {
        self.processes.iter().find(|p| p.id == id)
    }
}
