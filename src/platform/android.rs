// webshell Android view host
// Attaches a configured android.webkit.WebView directly to the running
// activity's content view via JNI, bypassing the toolkit's widget tree.

use jni::objects::{JObject, JValue};
use jni::JavaVM;

use crate::bridge::NativeViewHost;
use crate::types::errors::BridgeError;
use crate::types::webview::AttachRequest;

const WEBVIEW_CLASS: &str = "android/webkit/WebView";
const WEBVIEW_CLIENT_CLASS: &str = "android/webkit/WebViewClient";
const LAYOUT_PARAMS_CLASS: &str = "android/widget/LinearLayout$LayoutParams";

/// JNI-backed view host.
///
/// The activity and VM handles come from `ndk-context`, which the Android
/// glue populates before `main` runs. Once `addContentView` succeeds the
/// created objects belong to the native view hierarchy; no teardown happens
/// on this side.
pub struct AndroidViewHost;

impl AndroidViewHost {
    pub fn new() -> Self {
        Self
    }
}

impl Default for AndroidViewHost {
    fn default() -> Self {
        Self::new()
    }
}

impl NativeViewHost for AndroidViewHost {
    fn attach_webview(&mut self, request: &AttachRequest) -> Result<(), BridgeError> {
        let ctx = ndk_context::android_context();
        let vm = unsafe { JavaVM::from_raw(ctx.vm().cast()) }
            .map_err(|e| BridgeError::VmUnavailable(e.to_string()))?;
        let mut env = vm
            .attach_current_thread()
            .map_err(|e| BridgeError::VmUnavailable(e.to_string()))?;
        let activity = unsafe { JObject::from_raw(ctx.context() as jni::sys::jobject) };

        // new WebView(activity)
        let webview_class = env
            .find_class(WEBVIEW_CLASS)
            .map_err(|e| BridgeError::ClassResolution(format!("{}: {}", WEBVIEW_CLASS, e)))?;
        let webview = env
            .new_object(
                webview_class,
                "(Landroid/content/Context;)V",
                &[JValue::Object(&activity)],
            )
            .map_err(|e| BridgeError::Construction(format!("{}: {}", WEBVIEW_CLASS, e)))?;

        // webview.getSettings(), then the three storage/script knobs.
        let settings = env
            .call_method(
                &webview,
                "getSettings",
                "()Landroid/webkit/WebSettings;",
                &[],
            )
            .and_then(|v| v.l())
            .map_err(|e| BridgeError::MethodCall(format!("getSettings: {}", e)))?;
        let flags = [
            ("setJavaScriptEnabled", request.javascript_enabled),
            ("setDomStorageEnabled", request.dom_storage_enabled),
            ("setDatabaseEnabled", request.database_enabled),
        ];
        for (setter, enabled) in flags {
            env.call_method(&settings, setter, "(Z)V", &[JValue::Bool(enabled as u8)])
                .map_err(|e| BridgeError::MethodCall(format!("{}: {}", setter, e)))?;
        }

        // Default client so navigation stays inside the WebView instead of
        // being handed to an external browser.
        let client_class = env
            .find_class(WEBVIEW_CLIENT_CLASS)
            .map_err(|e| BridgeError::ClassResolution(format!("{}: {}", WEBVIEW_CLIENT_CLASS, e)))?;
        let client = env
            .new_object(client_class, "()V", &[])
            .map_err(|e| BridgeError::Construction(format!("{}: {}", WEBVIEW_CLIENT_CLASS, e)))?;
        env.call_method(
            &webview,
            "setWebViewClient",
            "(Landroid/webkit/WebViewClient;)V",
            &[JValue::Object(&client)],
        )
        .map_err(|e| BridgeError::MethodCall(format!("setWebViewClient: {}", e)))?;

        // The configured URL goes through verbatim.
        let url = env
            .new_string(&request.content_url)
            .map_err(|e| BridgeError::Construction(format!("url string: {}", e)))?;
        env.call_method(
            &webview,
            "loadUrl",
            "(Ljava/lang/String;)V",
            &[JValue::Object(&url)],
        )
        .map_err(|e| BridgeError::MethodCall(format!("loadUrl: {}", e)))?;

        // new LinearLayout.LayoutParams(width, height), then attach.
        let params_class = env
            .find_class(LAYOUT_PARAMS_CLASS)
            .map_err(|e| BridgeError::ClassResolution(format!("{}: {}", LAYOUT_PARAMS_CLASS, e)))?;
        let params = env
            .new_object(
                params_class,
                "(II)V",
                &[
                    JValue::Int(request.layout.width),
                    JValue::Int(request.layout.height),
                ],
            )
            .map_err(|e| BridgeError::Construction(format!("{}: {}", LAYOUT_PARAMS_CLASS, e)))?;
        env.call_method(
            &activity,
            "addContentView",
            "(Landroid/view/View;Landroid/view/ViewGroup$LayoutParams;)V",
            &[JValue::Object(&webview), JValue::Object(&params)],
        )
        .map_err(|e| BridgeError::MethodCall(format!("addContentView: {}", e)))?;

        log::info!("attached native WebView loading {}", request.content_url);
        Ok(())
    }

    fn name(&self) -> &'static str {
        "android-jni"
    }
}
