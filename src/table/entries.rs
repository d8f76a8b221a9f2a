//! Built-in redirect entries for the documentation site.
//!
//! Keys are legacy paths; values are current paths, optionally with an
//! in-page fragment. Keep keys unique: the table refuses to build otherwise.

/// Old path → new path, in authored order.
pub const ENTRIES: &[(&str, &str)] = &[
    ("/guides/creating-a-new-component", "/guides/five-minute-guide"),
    ("/controlling-layout", "/guides/controlling-layout"),
    ("/state-in-blocks", "/guides/state-in-blocks"),
    ("/custom-CSS-and-JS", "/guides/custom-CSS-and-JS"),
    ("/blocks-and-event-listeners", "/guides/blocks-and-event-listeners"),
    ("/using-blocks-like-functions", "/guides/using-blocks-like-functions"),
    ("/using-flagging", "/guides/using-flagging"),
    ("/named-entity-recognition", "/guides/named-entity-recognition"),
    ("/real-time-speech-recognition", "/guides/real-time-speech-recognition"),
    ("/eveloping-faster-with-reload-mode", "/guides/eveloping-faster-with-reload-mode"),
    ("/create-your-own-friends-with-a-gan", "/guides/create-your-own-friends-with-a-gan"),
    (
        "/setting-up-a-demo-for-maximum-performance",
        "/guides/setting-up-a-demo-for-maximum-performance",
    ),
    ("/building-a-pictionary-app", "/guides/building-a-pictionary-app"),
    ("/creating-a-chatbot", "/guides/creating-a-chatbot"),
    ("/how-to-use-D-model-component", "/guides/how-to-use-D-model-component"),
    ("/creating-a-new-component", "/guides/creating-a-new-component"),
    ("/running-background-tasks", "/guides/running-background-tasks"),
    ("/custom-interpretations-with-blocks", "/guides/custom-interpretations-with-blocks"),
    ("/reactive-interfaces", "/guides/reactive-interfaces"),
    ("/four-kinds-of-interfaces", "/guides/four-kinds-of-interfaces"),
    ("/interface-state", "/guides/interface-state"),
    ("/ore-on-examples", "/guides/ore-on-examples"),
    ("/advanced-interface-features", "/guides/advanced-interface-features"),
    ("/key-features", "/guides/key-features"),
    ("/quickstart", "/guides/quickstart"),
    ("/sharing-your-app", "/guides/sharing-your-app"),
    ("/connecting-to-a-database", "/guides/connecting-to-a-database"),
    (
        "/creating-a-realtime-dashboard-from-google-sheets",
        "/guides/creating-a-realtime-dashboard-from-google-sheets",
    ),
    ("/plot-component-for-maps", "/guides/plot-component-for-maps"),
    ("/creating-a-dashboard-from-bigquery-data", "/guides/creating-a-dashboard-from-bigquery-data"),
    ("/using-gradio-for-tabular-workflows", "/guides/using-gradio-for-tabular-workflows"),
    ("/image-classification-in-pytorch", "/guides/image-classification-in-pytorch"),
    ("/using-hugging-face-integrations", "/guides/using-hugging-face-integrations"),
    ("/Gradio-and-ONNX-on-Hugging-Face", "/guides/Gradio-and-ONNX-on-Hugging-Face"),
    (
        "/image-classification-with-vision-transformers",
        "/guides/image-classification-with-vision-transformers",
    ),
    ("/Gradio-and-Wandb-Integration", "/guides/Gradio-and-Wandb-Integration"),
    ("/image-classification-in-tensorflow", "/guides/image-classification-in-tensorflow"),
    ("/Gradio-and-Comet", "/guides/Gradio-and-Comet"),
    ("/introduction_to_blocks", "/guides/quickstart#more-complexity"),
    ("/adding_examples_to_your_app", "/guides/key-features#example-inputs"),
    ("/embedding_gradio_demos", "/guides/sharing-your-app#embedding-hosted-spaces"),
    ("/getting_started", "/guides/quickstart"),
    ("/building_with_blocks", "/guides/building-with-blocks"),
    ("/other_tutorials", "/guides/other-tutorials"),
    ("/building_interfaces", "/guides/building-interfaces"),
    ("/tabular_data_science_and_plots", "/guides/tabular-data-science-and-plots"),
    ("/integrating_other_frameworks", "/guides/integrating-other-frameworks"),
    ("/controlling_layout", "/guides/controlling-layout"),
    ("/state_in_blocks", "/guides/state-in-blocks"),
    ("/custom_CSS_and_JS", "/guides/custom-CSS-and-JS"),
    ("/blocks_and_event_listeners", "/guides/blocks-and-event-listeners"),
    ("/using_blocks_like_functions", "/guides/using-blocks-like-functions"),
    ("/using_flagging", "/guides/using-flagging"),
    ("/named_entity_recognition", "/guides/named-entity-recognition"),
    ("/real_time_speech_recognition", "/guides/real-time-speech-recognition"),
    ("/developing_faster_with_reload_mode", "/guides/developing-faster-with-reload-mode"),
    ("/create_your_own_friends_with_a_gan", "/guides/create-your-own-friends-with-a-gan"),
    (
        "/setting_up_a_demo_for_maximum_performance",
        "/guides/setting-up-a-demo-for-maximum-performance",
    ),
    ("/building_a_pictionary_app", "/guides/building-a-pictionary-app"),
    ("/creating_a_chatbot", "/guides/creating-a-chatbot"),
    ("/how_to_use_3D_model_component", "/guides/how-to-use-3D-model-component"),
    ("/creating_a_new_component", "/guides/creating-a-new-component"),
    ("/running_background_tasks", "/guides/running-background-tasks"),
    ("/custom_interpretations_with_blocks", "/guides/custom-interpretations-with-blocks"),
    ("/reactive_interfaces", "/guides/reactive-interfaces"),
    ("/more_on_examples_and_flagging", "/guides/more-on-examples"),
    ("/interface_state", "/guides/interface-state"),
    ("/advanced_interface_features", "/guides/advanced-interface-features"),
    ("/key_features", "/guides/key-features"),
    ("/sharing_your_app", "/guides/sharing-your-app"),
    ("/connecting_to_a_database", "/guides/connecting-to-a-database"),
    (
        "/creating_a_realtime_dashboard_from_google_sheets",
        "/guides/creating-a-realtime-dashboard-from-google-sheets",
    ),
    ("/plot_component_for_maps", "/guides/plot-component-for-maps"),
    ("/creating_a_dashboard_from_bigquery_data", "/guides/creating-a-dashboard-from-bigquery-data"),
    ("/using_gradio_for_tabular_workflows", "/guides/using-gradio-for-tabular-workflows"),
    ("/image_classification_in_pytorch", "/guides/image-classification-in-pytorch"),
    ("/using_hugging_face_integrations", "/guides/using-hugging-face-integrations"),
    ("/Gradio_and_ONNX_on_Hugging_Face", "/guides/Gradio-and-ONNX-on-Hugging-Face"),
    (
        "/image_classification_with_vision_transformers",
        "/guides/image-classification-with-vision-transformers",
    ),
    ("/Gradio_and_Wandb_Integration", "/guides/Gradio-and-Wandb-Integration"),
    ("/image_classification_in_tensorflow", "/guides/image-classification-in-tensorflow"),
    ("/demos", "/playground"),
];
