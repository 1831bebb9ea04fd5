// ============================================================================
// RESUME UPLOAD - Hero + zona de subida
// ============================================================================

use yew::prelude::*;

use crate::hooks::use_upload;

#[function_component(ResumeUpload)]
pub fn resume_upload() -> Html {
    let upload = use_upload();
    let store = &*upload.state;

    let button_classes = classes!(
        "w-full", "py-3", "rounded-lg", "text-white", "font-semibold", "transition-colors",
        if store.can_submit() {
            "bg-blue-500 hover:bg-blue-600 cursor-pointer"
        } else {
            "bg-blue-400 cursor-not-allowed"
        },
    );

    html! {
        <section class="py-20 bg-blue-100 text-black">
            <div class="container mx-auto px-4">
                <div class="max-w-3xl mx-auto text-center space-y-8">
                    <div class="space-y-4">
                        <h1 class="text-5xl md:text-6xl font-bold">{"Land Your First Job"}</h1>
                        <p class="text-xl text-gray-600">
                            {"Upload your resume and discover entry-level positions matched to your skills and experience"}
                        </p>
                    </div>

                    <div class="p-8 shadow-xl bg-white border border-blue-300 rounded-2xl space-y-6">
                        <div class="border-2 border-dashed border-blue-300 rounded-lg p-12 hover:border-blue-500 transition-colors">
                            <label class="cursor-pointer flex flex-col items-center gap-4">
                                if let Some(file) = &store.selected {
                                    <span class="text-5xl" aria-hidden="true">{"📄"}</span>
                                    <div class="text-center">
                                        <p class="selected-file font-medium text-black">{&file.name}</p>
                                        <p class="text-sm text-gray-600">{"Click to change"}</p>
                                    </div>
                                } else {
                                    <span class="text-5xl" aria-hidden="true">{"⬆️"}</span>
                                    <p class="font-medium text-black">{"Drop your resume here"}</p>
                                }
                                <input
                                    id="resume-upload"
                                    type="file"
                                    accept=".pdf,application/pdf"
                                    class="hidden"
                                    disabled={store.loading()}
                                    onchange={upload.on_file_change.clone()}
                                />
                            </label>
                        </div>

                        <button
                            type="button"
                            class={button_classes}
                            disabled={!store.can_submit()}
                            onclick={upload.on_submit.clone()}
                        >
                            {store.button_label()}
                        </button>

                        if let Some(status) = store.status_line() {
                            <p class="upload-status text-sm text-gray-700">{status}</p>
                        }

                        <p class="text-xs text-gray-500">
                            {"We'll score your resume and match you with the best entry-level opportunities"}
                        </p>
                    </div>
                </div>
            </div>
        </section>
    }
}
