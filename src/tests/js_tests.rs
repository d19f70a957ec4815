//! QuickJS 运行时测试
//! bundle 通过宿主对象 `Kivy` 建立控件层级，mount 输出控件树 JSON

use crate::bridge::{BuildStrategy, WidgetBridge};
use crate::error::BridgeError;
use crate::js::{QuickJsRuntime, RuntimeOptions, ScriptRuntime};
use serde_json::{json, Value};

fn mount(bundle: &str) -> Result<Value, BridgeError> {
    let mut runtime = QuickJsRuntime::new()?;
    let text = runtime.mount(bundle)?;
    Ok(serde_json::from_str(&text).unwrap())
}

fn mount_error(bundle: &str) -> String {
    match mount(bundle) {
        Err(BridgeError::Mount(message)) => message,
        Err(other) => panic!("unexpected error {}", other),
        Ok(tree) => panic!("mount should fail, got {}", tree),
    }
}

const COUNTER_BUNDLE: &str = r#"
Kivy.instantiateWidget(1, "BoxLayout", { orientation: "vertical", children: [2, 3] });
Kivy.instantiateWidget(2, "Label", { text: "Count: 0", font_size: 28 });
Kivy.instantiateWidget(3, "Button", { text: "+1", on_press: function () {} });
Kivy.bindHierarchy(1, 2);
Kivy.bindHierarchy(1, 3);
Kivy.bindHierarchy(0, 1);
"#;

/// 测试宿主对象建立的层级被序列化
#[test]
fn test_mount_serializes_hierarchy() {
    let tree = mount(COUNTER_BUNDLE).unwrap();
    assert_eq!(
        tree,
        json!({
            "widget_type": "BoxLayout",
            "props": {"orientation": "vertical"},
            "children": [
                {"widget_type": "Label", "props": {"text": "Count: 0", "font_size": 28}, "children": []},
                {"widget_type": "Button", "props": {"text": "+1"}, "children": []}
            ]
        })
    );
}

/// 测试定时器和 Promise 在序列化之前执行完
#[test]
fn test_timers_and_promises_settle() {
    let tree = mount(
        r#"
        Kivy.instantiateWidget(1, "BoxLayout", {});
        Kivy.bindHierarchy(0, 1);
        Promise.resolve().then(function () {
            Kivy.instantiateWidget(2, "Label", { text: "from promise" });
            Kivy.bindHierarchy(1, 2);
        });
        setTimeout(function (text) {
            Kivy.instantiateWidget(3, "Label", { text: text });
            Kivy.bindHierarchy(1, 3);
            setTimeout(function () { Kivy.applyPropertyUpdate(3, { text: "nested" }); }, 0);
        }, 10, "from timer");
        var cancelled = setTimeout(function () { Kivy.terminateWidget(1); }, 0);
        clearTimeout(cancelled);
        "#,
    )
    .unwrap();

    let children = tree["children"].as_array().unwrap();
    assert_eq!(children.len(), 2);
    assert_eq!(children[0]["props"]["text"], "from promise");
    assert_eq!(children[1]["props"]["text"], "nested");
}

/// 把 `order` 数组写进一个 Label 的 text，在所有定时器之后执行
const REPORT_ORDER: &str = r#"
setTimeout(function () {
    Kivy.instantiateWidget(1, "Label", { text: order.join(",") });
    Kivy.bindHierarchy(0, 1);
}, 1000);
"#;

fn timer_order(bundle: &str) -> Value {
    let tree = mount(&format!("var order = [];\n{}\n{}", bundle, REPORT_ORDER)).unwrap();
    tree["props"]["text"].clone()
}

/// 测试定时器按延迟排序，回调里可以取消同一时刻到期的定时器
#[test]
fn test_timers_follow_delay_order() {
    let order = timer_order(
        r#"
        setTimeout(function () { order.push("late"); }, 100);
        var t3;
        setTimeout(function () { order.push("early"); clearTimeout(t3); }, 0);
        t3 = setTimeout(function () { order.push("cleared"); }, 0);
        "#,
    );
    assert_eq!(order, "early,late");
}

/// 测试回调里新建的定时器按虚拟时钟插队
#[test]
fn test_nested_timer_uses_virtual_clock() {
    let order = timer_order(
        r#"
        setTimeout(function () { order.push("c"); }, 50);
        setTimeout(function () {
            order.push("a");
            setTimeout(function () { order.push("b"); }, 10);
            setTimeout(function () { order.push("d"); }, 60);
        }, 0);
        setTimeout(function () { order.push("same-time"); }, 50);
        setTimeout(function () { order.push("bad-delay"); }, "soon");
        "#,
    );
    assert_eq!(order, "a,bad-delay,b,c,same-time,d");
}

/// 测试解除挂载和销毁的控件不出现在输出里
#[test]
fn test_unbind_and_terminate() {
    let tree = mount(
        r#"
        Kivy.instantiateWidget(1, "BoxLayout", {});
        Kivy.instantiateWidget(2, "Label", { text: "a" });
        Kivy.instantiateWidget(3, "Label", { text: "b" });
        Kivy.instantiateWidget(4, "Label", { text: "c" });
        Kivy.bindHierarchy(1, 2);
        Kivy.bindHierarchy(1, 3);
        Kivy.bindHierarchy(1, 4);
        Kivy.bindHierarchy(0, 1);
        Kivy.unbindHierarchy(1, 2);
        Kivy.terminateWidget(4);
        "#,
    )
    .unwrap();
    let texts: Vec<_> = tree["children"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["props"]["text"].clone())
        .collect();
    assert_eq!(texts, vec![json!("b")]);
}

/// 测试重复绑定会移到末尾
#[test]
fn test_rebind_moves_child_to_end() {
    let tree = mount(
        r#"
        Kivy.instantiateWidget(1, "BoxLayout", {});
        Kivy.instantiateWidget(2, "Label", { text: "a" });
        Kivy.instantiateWidget(3, "Label", { text: "b" });
        Kivy.bindHierarchy(1, 2);
        Kivy.bindHierarchy(1, 3);
        Kivy.bindHierarchy(1, 2);
        Kivy.bindHierarchy(0, 1);
        "#,
    )
    .unwrap();
    assert_eq!(tree["children"][0]["props"]["text"], "b");
    assert_eq!(tree["children"][1]["props"]["text"], "a");
}

/// 测试多个根控件包进一个垂直 BoxLayout
#[test]
fn test_multiple_roots_wrapped() {
    let tree = mount(
        r#"
        Kivy.instantiateWidget(1, "Label", { text: "one" });
        Kivy.instantiateWidget(2, "Label", { text: "two" });
        Kivy.bindHierarchy(0, 1);
        Kivy.bindHierarchy(0, 2);
        "#,
    )
    .unwrap();
    assert_eq!(tree["widget_type"], "BoxLayout");
    assert_eq!(tree["props"]["orientation"], "vertical");
    assert_eq!(tree["children"].as_array().unwrap().len(), 2);
}

/// 测试 console 输出不影响 mount
#[test]
fn test_console_forwarding() {
    let tree = mount(
        r#"
        console.log("mounting", { env: process.env.NODE_ENV });
        console.warn("careful");
        console.error(new Error("not fatal"));
        Kivy.instantiateWidget(1, "Label", { text: process.env.NODE_ENV });
        Kivy.bindHierarchy(0, 1);
        "#,
    )
    .unwrap();
    assert_eq!(tree["props"]["text"], "production");
}

/// 测试 bundle 抛出异常
#[test]
fn test_bundle_exception() {
    let message = mount_error("throw new Error('boom');");
    assert!(message.contains("boom"), "{}", message);
}

/// 测试定时器回调抛出异常
#[test]
fn test_timer_exception() {
    let message = mount_error(
        r#"
        Kivy.instantiateWidget(1, "Label", {});
        Kivy.bindHierarchy(0, 1);
        setTimeout(function () { throw new Error("late boom"); }, 0);
        "#,
    );
    assert!(message.contains("late boom"), "{}", message);
}

/// 测试没有挂载任何控件
#[test]
fn test_nothing_mounted() {
    let message = mount_error("var x = 1;");
    assert!(message.contains("did not mount"), "{}", message);
}

/// 测试空 bundle
#[test]
fn test_empty_bundle() {
    assert_eq!(mount_error("   \n"), "empty bundle");
}

/// 测试层级出现环时报错而不是死循环
#[test]
fn test_hierarchy_cycle() {
    let message = mount_error(
        r#"
        Kivy.instantiateWidget(1, "BoxLayout", {});
        Kivy.instantiateWidget(2, "BoxLayout", {});
        Kivy.bindHierarchy(0, 1);
        Kivy.bindHierarchy(1, 2);
        Kivy.bindHierarchy(2, 1);
        "#,
    );
    assert!(message.contains("cycle"), "{}", message);
}

/// 测试每次 mount 使用干净的上下文
#[test]
fn test_mount_is_deterministic() {
    let mut runtime = QuickJsRuntime::new().unwrap();
    let first = runtime.mount(COUNTER_BUNDLE).unwrap();
    let second = runtime.mount(COUNTER_BUNDLE).unwrap();
    assert_eq!(first, second);

    // 上一次 mount 的全局状态不会泄漏
    let message = match runtime.mount("var y = 2;") {
        Err(BridgeError::Mount(message)) => message,
        other => panic!("unexpected result {:?}", other.map(|_| ())),
    };
    assert!(message.contains("did not mount"));
}

/// 测试定时器轮数上限
#[test]
fn test_timer_rounds_are_bounded() {
    let mut runtime = QuickJsRuntime::with_options(RuntimeOptions {
        memory_limit: None,
        max_timer_rounds: 4,
    })
    .unwrap();
    let text = runtime
        .mount(
            r#"
            Kivy.instantiateWidget(1, "Label", { text: "tick" });
            Kivy.bindHierarchy(0, 1);
            function tick() { setTimeout(tick, 0); }
            tick();
            "#,
        )
        .unwrap();
    assert!(text.contains("tick"));
}

/// 测试 QuickJS 输出经过整条桥接链路
#[test]
fn test_bridge_with_quickjs() {
    let mut bridge = WidgetBridge::new(QuickJsRuntime::new().unwrap());
    let output = bridge.sync_detailed(COUNTER_BUNDLE).unwrap();
    assert_eq!(output.strategy, BuildStrategy::Dynamic);
    assert_eq!(output.root.type_name(), "BoxLayout");
    let button = &output.root.children()[1];
    assert_eq!(button.type_name(), "Button");
    assert!(!button.properties().contains_key("on_press"));

    let output = bridge
        .sync_detailed(
            r#"
            Kivy.instantiateWidget(1, "BoxLayout", {});
            Kivy.instantiateWidget(2, "FancyChart", { text: "chart" });
            Kivy.bindHierarchy(1, 2);
            Kivy.bindHierarchy(0, 1);
            "#,
        )
        .unwrap();
    assert_eq!(
        output.strategy,
        BuildStrategy::Fallback {
            unresolved: "FancyChart".to_string()
        }
    );
    assert_eq!(output.root.children()[0].type_name(), "Label");
}
