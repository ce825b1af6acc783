pub mod runner_tests;

/// Two-lane collaboration used across the test modules: a Customer lane with
/// sequential order/pay tasks and a Shop lane with a receiving task, bridged
/// by one message flow.
pub const COLLABORATION_XML: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<bpmn:definitions xmlns:bpmn="http://www.omg.org/spec/BPMN/20100524/MODEL" id="definitions_1">
  <bpmn:collaboration id="collaboration_1">
    <bpmn:participant id="participant_customer" name="Customer" processRef="proc_customer"/>
    <bpmn:participant id="participant_shop" name="Shop" processRef="proc_shop"/>
    <bpmn:messageFlow id="m1" sourceRef="order" targetRef="recv"/>
  </bpmn:collaboration>
  <bpmn:process id="proc_customer" name="Customer process">
    <bpmn:startEvent id="start_c" name="Order placed"/>
    <bpmn:task id="order" name="Place order"/>
    <bpmn:task id="pay" name="Pay"/>
    <bpmn:endEvent id="end_c" name="Done"/>
    <bpmn:sequenceFlow id="f1" sourceRef="start_c" targetRef="order"/>
    <bpmn:sequenceFlow id="f2" sourceRef="order" targetRef="pay"/>
    <bpmn:sequenceFlow id="f3" sourceRef="pay" targetRef="end_c"/>
  </bpmn:process>
  <bpmn:process id="proc_shop" name="Shop process">
    <bpmn:startEvent id="start_s" name="Waiting"/>
    <bpmn:task id="recv" name="Receive order"/>
    <bpmn:endEvent id="end_s" name="Handled"/>
    <bpmn:sequenceFlow id="g1" sourceRef="start_s" targetRef="recv"/>
    <bpmn:sequenceFlow id="g2" sourceRef="recv" targetRef="end_s"/>
  </bpmn:process>
</bpmn:definitions>
"#;
