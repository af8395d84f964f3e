//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# Athena Configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[provider]
# model = "gemini-2.5-flash"
# api_key_env = "API_KEY"          # environment variable holding the credential
# base_url = "https://generativelanguage.googleapis.com/v1beta/models"
# max_output_tokens = 4096         # 1-65536
# temperature = 0.7                # 0.0-2.0
# connect_timeout_secs = 10        # 1-60
# request_timeout_secs = 120       # 5-600

[persona]
# name = "Athena"
# title = "Senior Visa Specialist"
# greeting = "Welcome to Elite Visa Consultants. I am Athena, your AI specialist. How may I assist with your global mobility needs today?"
# system_instruction = """..."""

[fallbacks]
# reconnecting = "I'm currently reconnecting to our secure consultation server. Please try again in a moment."
# connection_issue = "We encountered a temporary connection issue. Please try sending your message again."
# empty_response = "I apologize, I could not generate a response at this time."

[logging]
# level = "INFO"                   # DEBUG, INFO, WARNING, ERROR
"##
    .to_string()
}
