//! 宿主预置脚本
//!
//! 每次 mount 之前注入：`Kivy` 宿主对象（协调器回调）、console、按虚拟时钟排序的定时器，
//! 以及把已挂载的控件层级序列化成 JSON 的 `__kivy_mount`。
//! 父 id 为 0 表示根容器。

pub(crate) const HOST_PRELUDE: &str = r#"
var __mount_error = "";
var __widgets = {};
var __hierarchy = { 0: [] };
var __timer_queue = [];
var __timer_seq = 0;
var __timer_clock = 0;

function __describe_error(e) {
    if (e && e.stack) {
        return String(e) + "\n" + e.stack;
    }
    return String(e);
}

var console = (function () {
    function forward(level) {
        return function () {
            var msg = Array.prototype.slice.call(arguments).map(function (a) {
                if (typeof a === "string") { return a; }
                try { return String(JSON.stringify(a)); } catch (e) { return String(a); }
            }).join(" ");
            __native_log(level, msg);
        };
    }
    return {
        log: forward("info"),
        info: forward("info"),
        debug: forward("debug"),
        warn: forward("warn"),
        error: forward("error")
    };
})();

var process = { env: { NODE_ENV: "production" } };

function setTimeout(callback, delay) {
    var id = ++__timer_seq;
    var wait = Number(delay);
    __timer_queue.push({
        id: id,
        at: __timer_clock + (wait > 0 ? wait : 0),
        callback: callback,
        args: Array.prototype.slice.call(arguments, 2)
    });
    return id;
}

function clearTimeout(id) {
    __timer_queue = __timer_queue.filter(function (t) { return t.id !== id; });
}

function queueMicrotask(callback) {
    Promise.resolve().then(callback);
}

// 虚拟时钟：取到期时间最早的一个（同时到期按创建顺序），时钟拨到它的到期时间
function __run_next_timer() {
    if (__timer_queue.length === 0) {
        return 0;
    }
    var next = 0;
    for (var i = 1; i < __timer_queue.length; i++) {
        if (__timer_queue[i].at < __timer_queue[next].at) { next = i; }
    }
    var timer = __timer_queue.splice(next, 1)[0];
    if (timer.at > __timer_clock) { __timer_clock = timer.at; }
    try {
        if (typeof timer.callback === "function") {
            timer.callback.apply(null, timer.args);
        }
    } catch (e) {
        __mount_error = __describe_error(e);
        return -1;
    }
    return 1;
}

var Kivy = {
    instantiateWidget: function (id, type, props) {
        __widgets[id] = { type: String(type), props: props || {} };
        if (!__hierarchy[id]) { __hierarchy[id] = []; }
    },
    bindHierarchy: function (parentId, childId) {
        var list = __hierarchy[parentId] || (__hierarchy[parentId] = []);
        var at = list.indexOf(childId);
        if (at >= 0) { list.splice(at, 1); }
        list.push(childId);
    },
    unbindHierarchy: function (parentId, childId) {
        var list = __hierarchy[parentId];
        if (!list) { return; }
        var at = list.indexOf(childId);
        if (at >= 0) { list.splice(at, 1); }
    },
    terminateWidget: function (id) {
        delete __widgets[id];
        delete __hierarchy[id];
    },
    applyPropertyUpdate: function (id, props) {
        if (__widgets[id]) { __widgets[id].props = props || {}; }
    }
};
globalThis.Kivy = Kivy;

function __serialize_props(props) {
    var out = {};
    Object.keys(props).forEach(function (key) {
        var value = props[key];
        if (key === "children" || typeof value === "function" || value === undefined) {
            return;
        }
        out[key] = value;
    });
    return out;
}

function __live_children(id) {
    return (__hierarchy[id] || []).filter(function (c) { return __widgets[c] !== undefined; });
}

function __serialize_widget(id, path) {
    if (path.indexOf(id) >= 0) {
        throw new Error("widget hierarchy cycle at id " + id);
    }
    var widget = __widgets[id];
    var next = path.concat([id]);
    return {
        widget_type: widget.type,
        props: __serialize_props(widget.props),
        children: __live_children(id).map(function (c) { return __serialize_widget(c, next); })
    };
}

function __kivy_mount() {
    try {
        var roots = __live_children(0);
        if (roots.length === 0) {
            __mount_error = "bundle did not mount any widget";
            return null;
        }
        var tree = roots.length === 1
            ? __serialize_widget(roots[0], [])
            : {
                widget_type: "BoxLayout",
                props: { orientation: "vertical" },
                children: roots.map(function (id) { return __serialize_widget(id, []); })
            };
        return JSON.stringify(tree);
    } catch (e) {
        __mount_error = __describe_error(e);
        return null;
    }
}

function __run_bundle() {
    try {
        (0, eval)(__bundle_source);
        return "";
    } catch (e) {
        return __describe_error(e);
    }
}
"#;
