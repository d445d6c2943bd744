/// Static worked example embedded in every prompt. Shows the model the exact
/// shape we want for `generatedCode`: a self-contained `AppWindow` function
/// with no imports, hooks pulled off the `React` global, plain
/// `React.createElement` calls. Style exemplar only, never executed here.
const COMPONENT_EXAMPLE: &str = r#"function AppWindow() {
  var _React = React;
  var useState = _React.useState;

  var _useState = useState([]), todos = _useState[0], setTodos = _useState[1];
  var _useState2 = useState(''), inputValue = _useState2[0], setInputValue = _useState2[1];

  function addTodo() {
    if (inputValue.trim()) {
      setTodos(todos.concat([{ id: Date.now(), text: inputValue, completed: false }]));
      setInputValue('');
    }
  }

  function toggleTodo(id) {
    setTodos(todos.map(function(todo){
      return todo.id === id ? { id: todo.id, text: todo.text, completed: !todo.completed } : todo;
    }));
  }

  function removeTodo(id) {
    setTodos(todos.filter(function(t){ return t.id !== id; }));
  }

  return React.createElement('div', { className: 'container' },
    React.createElement('h1', null, 'Modern TODO'),
    React.createElement('div', { className: 'input-section' },
      React.createElement('input', {
        type: 'text',
        value: inputValue,
        onChange: function(e) { setInputValue(e.target.value); },
        placeholder: 'Enter a new task...',
        className: 'todo-input'
      }),
      React.createElement('button', { onClick: addTodo, className: 'add-btn' }, 'Add')
    ),
    todos.length === 0
      ? React.createElement('div', { style: { textAlign: 'center', padding: '40px 20px', color: '#cccccc', fontSize: '18px' } }, 'Add your first task')
      : React.createElement('ul', { className: 'todo-list' },
          todos.map(function(todo, index){
            return React.createElement('li', {
              key: String(todo.id),
              className: todo.completed ? 'todo-item completed' : 'todo-item',
              style: { animationDelay: (index * 0.1) + 's' }
            },
              React.createElement('input', { type: 'checkbox', checked: todo.completed, onChange: function(){ toggleTodo(todo.id); } }),
              React.createElement('span', { className: 'todo-text' }, todo.text),
              React.createElement('button', {
                onClick: function(){ removeTodo(todo.id); },
                style: { background: 'transparent', border: 'none', color: '#ef4444', cursor: 'pointer', padding: '4px 8px', borderRadius: '6px', fontSize: '14px', marginLeft: 'auto' }
              }, 'Delete')
            );
          })
        )
  );
}
"#;

/// Render the three user inputs into the single instruction string sent to
/// the model. Pure function: identical inputs always produce byte-identical
/// prompts.
pub fn compose_prompt(purpose: &str, items: &str, design_request: &str) -> String {
    let mut prompt = format!(
        "You are an expert React component generator.
Create a functional React component and its CSS based on the requirements below.

Screen purpose: {purpose}
Required items: {items}
Design request: {design_request}

Output:
1. React component (function component, ES6 syntax)
2. Matching CSS (modern design)

Notes:
- Use React hooks
- Responsive design
- Consider accessibility
- Include error handling

Return as JSON:
{{
  \"generatedCode\": \"the React component code\",
  \"generatedCSS\": \"the CSS code\"
}}

For \"generatedCode\", produce self-contained code with no imports, shaped like the example below, and name the function AppWindow.
"
    );
    prompt.push_str(COMPONENT_EXAMPLE);
    prompt.push_str(
        "
Make sure the reply can actually be parsed as JSON; in particular, wrap string values in double quotes.
Your reply is parsed mechanically, so do not add commentary or explanations around it.
",
    );
    prompt
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_inputs_give_identical_prompts() {
        let a = compose_prompt("todo screen", "input, list", "modern");
        let b = compose_prompt("todo screen", "input, list", "modern");
        assert_eq!(a, b);
    }

    #[test]
    fn prompt_embeds_all_three_inputs() {
        let prompt = compose_prompt("a login screen", "email, password", "dark and minimal");
        assert!(prompt.contains("a login screen"));
        assert!(prompt.contains("email, password"));
        assert!(prompt.contains("dark and minimal"));
    }

    #[test]
    fn prompt_names_the_output_fields_and_component() {
        let prompt = compose_prompt("p", "i", "d");
        assert!(prompt.contains("\"generatedCode\""));
        assert!(prompt.contains("\"generatedCSS\""));
        assert!(prompt.contains("AppWindow"));
        assert!(prompt.contains("function AppWindow()"));
    }
}
